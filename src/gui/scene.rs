use zmotion_engine::{adapter::RenderArgs, eframe::egui};

/// What the main panel draws, produced by the adapter's render function.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
    NoData,
    Motion {
        /// Pixels from the center of the panel
        offset: egui::Vec2,
        lines: Vec<String>,
    },
}

/// Acceleration maps one to one onto pixels, so the adapter's multiplier
/// decides how far the marker travels.
pub fn render(args: RenderArgs) -> Scene {
    let Some((position, rotation)) = args
    else { return Scene::NoData; };

    let mut lines = vec![
        format!("X: {:+.2}", position.x),
        format!("Y: {:+.2}", position.y),
        format!("Z: {:+.2}", position.z),
    ];

    lines.push(match rotation {
        Some(rotation) => format!(
            "Rotation: α {:+.1} β {:+.1} γ {:+.1}",
            rotation.alpha, rotation.beta, rotation.gamma
        ),
        None => "Rotation: unavailable".to_owned(),
    });

    Scene::Motion {
        offset: egui::vec2(position.x as f32, position.y as f32),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use zmotion_engine::{
        device::{Position, RotationRate},
        eframe::egui,
    };

    use super::{render, Scene};

    #[test]
    fn no_args_means_no_data() {
        assert_eq!(render(None), Scene::NoData);
    }

    #[test]
    fn position_moves_the_marker() {
        let scene = render(Some((
            Position::new(10.0, -15.0, 20.0),
            Some(RotationRate::new(1.0, 2.0, 3.0)),
        )));

        let Scene::Motion { offset, lines } = scene
        else { panic!("expected motion scene") };

        assert_eq!(offset, egui::vec2(10.0, -15.0));
        assert_eq!(
            lines,
            [
                "X: +10.00",
                "Y: -15.00",
                "Z: +20.00",
                "Rotation: α +1.0 β +2.0 γ +3.0",
            ]
        );
    }

    #[test]
    fn missing_rotation_is_labelled() {
        let Scene::Motion { lines, .. } = render(Some((Position::new(1.0, 0.0, 0.0), None)))
        else { panic!("expected motion scene") };

        assert_eq!(lines.last().unwrap(), "Rotation: unavailable");
    }
}
