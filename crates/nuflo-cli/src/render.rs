//! Stateless rendering of a deployment into map-ready output.
//!
//! The GeoJSON produced here carries marker styles, popup HTML, the legend
//! and the initial view so a web map can draw the scene without any logic
//! of its own.

use chrono::{DateTime, SecondsFormat, Utc};
use nuflo_core::{Deployment, Well};
use serde::Serialize;
use serde_json::{json, Value};

/// Initial map center over Peru.
pub const VIEW_CENTER: (f64, f64) = (-9.19, -75.015);
pub const VIEW_ZOOM: u8 = 6;

/// Marker radius in meters for wells and gateways.
const MARKER_RADIUS_M: f64 = 5000.0;

const WELL_STYLE: MarkerStyle = MarkerStyle {
    color: "blue",
    fill_color: "#007bff",
    class_name: None,
};
const ALERT_STYLE: MarkerStyle = MarkerStyle {
    color: "orange",
    fill_color: "#ffa500",
    class_name: Some("alert-glow"),
};
const GATEWAY_STYLE: MarkerStyle = MarkerStyle {
    color: "red",
    fill_color: "#ff4d4d",
    class_name: None,
};

struct MarkerStyle {
    color: &'static str,
    fill_color: &'static str,
    class_name: Option<&'static str>,
}

impl MarkerStyle {
    fn to_json(&self) -> Value {
        let mut style = json!({
            "color": self.color,
            "fillColor": self.fill_color,
            "fillOpacity": 1.0,
            "radius": MARKER_RADIUS_M,
        });
        if let Some(class_name) = self.class_name {
            style["className"] = json!(class_name);
        }
        style
    }
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub shape: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(rename = "fillColor")]
    pub fill_color: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            label: "NuFlo Well Sensor",
            shape: "circle",
            color: Some(WELL_STYLE.color),
            fill_color: WELL_STYLE.fill_color,
        },
        LegendEntry {
            label: "NuFlo Alert",
            shape: "circle",
            color: None,
            fill_color: ALERT_STYLE.fill_color,
        },
        LegendEntry {
            label: "NuFlo Data Gateway",
            shape: "circle",
            color: Some(GATEWAY_STYLE.color),
            fill_color: GATEWAY_STYLE.fill_color,
        },
    ]
}

/// Popup content for the well at zero-based `index`.
pub fn well_popup_html(index: usize, well: &Well) -> String {
    let alert_line = if well.alert {
        format!("<p><strong>ALERT:</strong> {}</p>", well.issue_label())
    } else {
        String::new()
    };
    format!(
        "<div><h3>Water Well #{}</h3>{}\
         <p><strong>pH:</strong> {:.2}</p>\
         <p><strong>Lead:</strong> {:.4} ppb</p>\
         <p><strong>Coliform:</strong> {} CFU/100ml</p>\
         <p><strong>Temperature:</strong> {:.2} C</p>\
         <p><strong>TDS:</strong> {:.2} ppm</p></div>",
        index + 1,
        alert_line,
        well.ph,
        well.lead,
        well.coliform,
        well.temperature,
        well.tds
    )
}

/// Popup content for the gateway at zero-based `index`.
pub fn gateway_popup_html(index: usize) -> String {
    format!(
        "<div><h3>LoRa Gateway #{}</h3></div>\
         <div><p>RECEIVING...OK</p></div>\
         <div><p>SENDING...OK</p></div>",
        index + 1
    )
}

/// Build the GeoJSON scene: gateways, then wells, then links.
pub fn feature_collection(deployment: &Deployment, generated_at: DateTime<Utc>) -> Value {
    let mut features =
        Vec::with_capacity(deployment.gateways.len() + deployment.wells.len() * 2);

    for (index, gateway) in deployment.gateways.iter().enumerate() {
        features.push(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [gateway.lon, gateway.lat] },
            "properties": {
                "kind": "gateway",
                "index": index,
                "title": format!("LoRa Gateway #{}", index + 1),
                "style": GATEWAY_STYLE.to_json(),
                "popup": gateway_popup_html(index),
            }
        }));
    }

    for (index, well) in deployment.wells.iter().enumerate() {
        let style = if well.alert { &ALERT_STYLE } else { &WELL_STYLE };
        features.push(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [well.lon, well.lat] },
            "properties": {
                "kind": "well",
                "index": index,
                "title": format!("Water Well #{}", index + 1),
                "pH": well.ph,
                "lead": well.lead,
                "coliform": well.coliform,
                "temperature": well.temperature,
                "tds": well.tds,
                "alert": well.alert,
                "issue": well.issue_label(),
                "style": style.to_json(),
                "popup": well_popup_html(index, well),
            }
        }));
    }

    for link in &deployment.links {
        let (Some(well), Some(gateway)) = (
            deployment.wells.get(link.well_index),
            deployment.gateways.get(link.gateway_index),
        ) else {
            continue;
        };
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [[well.lon, well.lat], [gateway.lon, gateway.lat]],
            },
            "properties": {
                "kind": "link",
                "well_index": link.well_index,
                "gateway_index": link.gateway_index,
                "distance_km": link.distance_km,
                "style": { "color": "green", "weight": 2, "dashArray": "5, 5" },
            }
        }));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
        "view": {
            "center": [VIEW_CENTER.0, VIEW_CENTER.1],
            "zoom": VIEW_ZOOM,
        },
        "legend": legend(),
        "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Plain-text overview of a deployment.
pub fn summary_text(deployment: &Deployment) -> String {
    let alerted = deployment.alerted_indices();
    let coverage = deployment.coverage();

    let mut lines = vec![format!(
        "{} wells, {} gateways, {} alerts",
        deployment.wells.len(),
        deployment.gateways.len(),
        alerted.len()
    )];

    lines.extend(alerted.iter().map(|&index| {
        let well = &deployment.wells[index];
        format!(
            "  ALERT Water Well #{} ({:.4}, {:.4}): {}",
            index + 1,
            well.lat,
            well.lon,
            well.issue_label()
        )
    }));

    lines.extend(
        deployment
            .gateways
            .iter()
            .zip(&coverage.wells_per_gateway)
            .enumerate()
            .map(|(index, (gateway, count))| {
                format!(
                    "  LoRa Gateway #{} ({:.4}, {:.4}): {} wells",
                    index + 1,
                    gateway.lat,
                    gateway.lon,
                    count
                )
            }),
    );

    lines.push(format!(
        "link distance: mean {:.1} km, max {:.1} km",
        coverage.mean_distance_km, coverage.max_distance_km
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
