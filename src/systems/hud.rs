use bevy::prelude::*;

use crate::components::{HudText, StallBanner};
use crate::resources::{FlightSimulation, SimPaused};

pub fn hud_text_system(
    simulation: Res<FlightSimulation>,
    paused: Res<SimPaused>,
    mut texts: Query<&mut Text, With<HudText>>,
) {
    let mut lines = simulation.hud().lines();
    if paused.0 {
        lines.push("PAUSED".to_string());
    }
    let content = lines.join("\n");
    for mut text in texts.iter_mut() {
        if text.0 != content {
            text.0.clone_from(&content);
        }
    }
}

pub fn stall_banner_system(
    simulation: Res<FlightSimulation>,
    mut banners: Query<&mut Visibility, With<StallBanner>>,
) {
    let visibility = if simulation.hud().stall_warning {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut banner in banners.iter_mut() {
        *banner = visibility;
    }
}
