//! Button layouts and descriptive texts for the chat frontend. Pure
//! functions, no I/O.

use serde::Serialize;

use super::styles::{ASPECT_RATIOS, RESOLUTIONS, STYLES};

pub static CALLBACK_CANCEL: &str = "transform_cancel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
    pub callback_data: String,
}

fn cancel_row() -> Vec<KeyboardButton> {
    vec![KeyboardButton {
        text: "❌ Cancel".to_string(),
        callback_data: CALLBACK_CANCEL.to_string(),
    }]
}

/// Style picker, two buttons per row.
pub fn get_style_keyboard() -> Vec<Vec<KeyboardButton>> {
    let mut keyboard = Vec::new();
    let mut row = Vec::new();

    for style in STYLES.iter() {
        row.push(KeyboardButton {
            text: style.name.to_string(),
            callback_data: ["transform_style:", style.key].concat(),
        });

        if row.len() == 2 {
            keyboard.push(row);
            row = Vec::new();
        }
    }

    if !row.is_empty() {
        keyboard.push(row);
    }

    keyboard.push(cancel_row());
    keyboard
}

/// Aspect ratio picker, three buttons per row.
pub fn get_aspect_ratio_keyboard(style_key: &str) -> Vec<Vec<KeyboardButton>> {
    let mut keyboard = Vec::new();
    let mut row = Vec::new();

    for ratio in ASPECT_RATIOS {
        row.push(KeyboardButton {
            text: ratio.to_string(),
            callback_data: ["transform_ratio:", style_key, ":", ratio].concat(),
        });

        if row.len() == 3 {
            keyboard.push(row);
            row = Vec::new();
        }
    }

    if !row.is_empty() {
        keyboard.push(row);
    }

    keyboard.push(cancel_row());
    keyboard
}

/// Resolution picker (currently a single 720p option).
pub fn get_resolution_keyboard(style_key: &str, aspect_ratio: &str) -> Vec<Vec<KeyboardButton>> {
    let mut keyboard = Vec::new();
    let mut row = Vec::new();

    for resolution in RESOLUTIONS {
        row.push(KeyboardButton {
            text: resolution.to_string(),
            callback_data: [
                "transform_resolution:",
                style_key,
                ":",
                aspect_ratio,
                ":",
                resolution,
            ]
            .concat(),
        });
    }

    if !row.is_empty() {
        keyboard.push(row);
    }

    keyboard.push(cancel_row());
    keyboard
}

pub fn get_style_description(style_key: &str) -> &'static str {
    match style_key {
        "photoshop" => {
            "🤍 Photoshop / Enhancement\n\n\
            You, exactly as you are, but in the best possible light.\n\
            Clean background, fresh-looking skin, natural colors.\n\
            As if your photo was retouched by a pro. No heavy filters.\n\n\
            📌 Works for: avatars, resumes, profile pictures.\n\
            ⚡ A neural network polishes the quality"
        }
        "art" => {
            "🎨 AI Art / Illustration\n\n\
            Your photo becomes art.\n\
            Lines, light, pastel tones or digital illustration style, and you \
            look like a character from a book or a Pinterest poster.\n\n\
            📌 Works for: creative projects, stories, aesthetic content.\n\
            🎨 A unique illustration is generated for you"
        }
        "cinema" => {
            "🎬 Cinema / Cinematic\n\n\
            You in the frame, as if it were a scene from a film.\n\
            Atmospheric colors, directional light and a touch of drama.\n\n\
            📌 Works for: bold looks, wow effect, moody posts.\n\
            🎥 Cinematic grading is applied to your photo"
        }
        "portrait" => {
            "🧠 Portrait / Psychological\n\n\
            A deep gaze, soft shadows, focus on the face.\n\
            The effect of being shot by a photographer who knows how to show \
            character.\n\n\
            📌 Works for: calm avatars, presentations, soulful content.\n\
            📸 A professional portrait is generated for you"
        }
        "fantasy" => {
            "⚡ Sci-Fi / Neon-Cyber\n\n\
            You in another time, in another universe.\n\
            Glitches, neon, dramatic light. Visual action straight out of a \
            sci-fi trailer.\n\n\
            📌 Works for: avatars, stories, standout posts.\n\
            🚀 You get transported into the future"
        }
        "lego" => {
            "🧱 LEGO / Minifigure\n\n\
            Turned into a detailed LEGO minifigure.\n\
            Bright colors, blocky textures, the iconic construction-kit look.\n\
            Every detail is worked out down to the smallest brick!\n\n\
            📌 Works for: fun avatars, gifts, creative content.\n\
            🧱 Your unique LEGO version is generated for you"
        }
        _ => "Description unavailable.",
    }
}

pub fn get_aspect_ratio_description() -> &'static str {
    "📐 Pick an aspect ratio for your image!\n\n\
    It is like a frame for a painting: it defines the shape of the picture.\n\
    - 9:16: vertical, ideal for stories and mobile screens 📱\n\
    - 16:9: horizontal, like a YouTube video or a movie screen 🎥\n\
    - 1:1: square, the classic for avatars and social feeds 🔲\n\
    - 3:4 / 4:3: portrait or landscape, universal for photos 📸\n\n\
    The generation is tuned to the chosen format for the best result! ✨"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::styles;

    #[test]
    fn style_keyboard_has_two_buttons_per_row_plus_cancel() {
        let keyboard = get_style_keyboard();

        // 6 styles -> 3 rows of 2, then the cancel row
        assert_eq!(keyboard.len(), 4);
        for row in &keyboard[..3] {
            assert_eq!(row.len(), 2);
        }
        assert_eq!(keyboard[3], cancel_row());
    }

    #[test]
    fn style_buttons_carry_style_callbacks() {
        let keyboard = get_style_keyboard();
        assert_eq!(keyboard[0][0].callback_data, "transform_style:photoshop");
        assert_eq!(keyboard[0][1].callback_data, "transform_style:art");
    }

    #[test]
    fn aspect_ratio_keyboard_has_three_buttons_per_row_plus_cancel() {
        let keyboard = get_aspect_ratio_keyboard("lego");

        // 5 ratios -> a row of 3, a row of 2, then the cancel row
        assert_eq!(keyboard.len(), 3);
        assert_eq!(keyboard[0].len(), 3);
        assert_eq!(keyboard[1].len(), 2);
        assert_eq!(keyboard[0][0].callback_data, "transform_ratio:lego:9:16");
        assert_eq!(keyboard[2], cancel_row());
    }

    #[test]
    fn resolution_keyboard_lists_every_supported_resolution() {
        let keyboard = get_resolution_keyboard("art", "1:1");

        assert_eq!(keyboard.len(), 2);
        assert_eq!(keyboard[0].len(), 1);
        assert_eq!(
            keyboard[0][0].callback_data,
            "transform_resolution:art:1:1:720p"
        );
        assert_eq!(keyboard[1], cancel_row());
    }

    #[test]
    fn every_registered_style_has_a_description() {
        for style in styles::STYLES.iter() {
            assert_ne!(get_style_description(style.key), "Description unavailable.");
        }
        assert_eq!(
            get_style_description("claymation"),
            "Description unavailable."
        );
    }
}
