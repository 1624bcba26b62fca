use super::{
    enums::transform_model::TransformModel, models::style::Style, DEFAULT_ASPECT_RATIO,
    DEFAULT_RESOLUTION,
};

pub static ASPECT_RATIOS: [&str; 5] = ["9:16", "4:3", "3:4", "1:1", "16:9"];
pub static RESOLUTIONS: [&str; 1] = [DEFAULT_RESOLUTION];

lazy_static! {
    pub static ref STYLES: Vec<Style> = vec![
        Style {
            key: "photoshop",
            name: "🤍 Photoshop",
            description: "Quality enhancement without changes",
            prompt_template: "Professional portrait photo of @person, enhanced quality, flawless high-definition smooth beautiful skin, perfect even skin tone, flawless complexion, razor-sharp focus on eyes, detailed ultra-realistic eyes, clean background, natural colors, perfect lighting, photorealistic, ultra-high resolution, 16K, masterpiece, best quality, hyper-detailed, no artifacts, sharp details everywhere, crystal-clear sharpness, flawless 32K resolution",
            model: TransformModel::GEN4_IMAGE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        },
        Style {
            key: "art",
            name: "🎨 AI Art",
            description: "Illustration in an artistic style",
            prompt_template: "Digital art illustration of @person, artistic style, flawless high-definition smooth beautiful skin, perfect even skin tone, flawless complexion, razor-sharp focus on eyes, detailed ultra-realistic eyes, pastel colors, creative portrait, Pinterest aesthetic, beautiful lighting, stylized, ultra-high resolution, 16K, masterpiece, best quality, hyper-detailed, no artifacts, sharp details everywhere, crystal-clear sharpness, flawless 32K resolution",
            model: TransformModel::GEN4_IMAGE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        },
        Style {
            key: "cinema",
            name: "🎬 Cinema",
            description: "A frame from a feature film",
            prompt_template: "Cinematic portrait of @person, movie scene, flawless high-definition smooth beautiful skin, perfect even skin tone, flawless complexion, razor-sharp focus on eyes, detailed ultra-realistic eyes, dramatic lighting, film grain, atmospheric colors, professional cinematography, ultra-high resolution, 16K, masterpiece, best quality, hyper-detailed, no artifacts, sharp details everywhere, crystal-clear sharpness, flawless 32K resolution",
            model: TransformModel::GEN4_IMAGE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        },
        Style {
            key: "portrait",
            name: "🧠 Portrait",
            description: "A deep psychological likeness",
            prompt_template: "Deep psychological portrait of @person, soft shadows, face focus, flawless high-definition smooth beautiful skin, perfect even skin tone, flawless complexion, razor-sharp focus on eyes, detailed ultra-realistic eyes, character photography, soulful expression, professional photographer style, ultra-high resolution, 16K, masterpiece, best quality, hyper-detailed, no artifacts, sharp details everywhere, crystal-clear sharpness, flawless 32K resolution",
            model: TransformModel::GEN4_IMAGE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        },
        Style {
            key: "fantasy",
            name: "⚡ Sci-Fi",
            description: "Neon, sci-fi, visual drive",
            prompt_template: "Cyberpunk portrait of @person, neon lights, sci-fi style, flawless high-definition smooth beautiful skin, perfect even skin tone, flawless complexion, razor-sharp focus on eyes, detailed ultra-realistic eyes, futuristic, glitch effects, dramatic lighting, cosmic atmosphere, ultra-high resolution, 16K, masterpiece, best quality, hyper-detailed, no artifacts, sharp details everywhere, crystal-clear sharpness, flawless 32K resolution",
            model: TransformModel::GEN4_IMAGE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        },
        Style {
            key: "lego",
            name: "🧱 LEGO",
            description: "Turned into a LEGO minifigure",
            prompt_template: "A hyper-detailed LEGO minifigure of @person, ultra-realistic LEGO style, razor-sharp focus on eyes, detailed eyes, 4K resolution, vibrant colors, precise blocky textures, LEGO hair with stud details, glossy LEGO pieces, visible brick seams, LEGO cityscape background, cinematic lighting, plastic sheen, blocky toy-like nature, perfect LEGO brick alignment, stud patterns, reflective plastic surfaces, ultra-high resolution, 16K, masterpiece, best quality, no artifacts, sharp details everywhere, crystal-clear sharpness, flawless 32K resolution",
            model: TransformModel::GEN4_IMAGE,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        },
    ];
}

pub fn get_style(key: &str) -> Option<&'static Style> {
    STYLES.iter().find(|style| style.key == key)
}

/// Expands shorthand ratios ("9" for "9:16") to their full form.
pub fn normalize_aspect_ratio(aspect_ratio: &str) -> &str {
    match aspect_ratio {
        "9" => "9:16",
        "16" => "16:9",
        "4" => "4:3",
        "3" => "3:4",
        "1" => "1:1",
        other => other,
    }
}

pub fn is_supported_aspect_ratio(aspect_ratio: &str) -> bool {
    ASPECT_RATIOS.contains(&aspect_ratio)
}

pub fn is_supported_resolution(resolution: &str) -> bool {
    RESOLUTIONS.contains(&resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_registered_in_menu_order() {
        let keys: Vec<&str> = STYLES.iter().map(|style| style.key).collect();
        assert_eq!(
            keys,
            vec!["photoshop", "art", "cinema", "portrait", "fantasy", "lego"]
        );
    }

    #[test]
    fn every_style_targets_gen4_with_portrait_default() {
        for style in STYLES.iter() {
            assert_eq!(style.model, TransformModel::GEN4_IMAGE);
            assert_eq!(style.aspect_ratio, "3:4");
            assert!(style.prompt_template.contains("@person"));
        }
    }

    #[test]
    fn get_style_finds_known_keys_only() {
        assert!(get_style("lego").is_some());
        assert!(get_style("claymation").is_none());
    }

    #[test]
    fn shorthand_ratios_normalize_to_full_form() {
        assert_eq!(normalize_aspect_ratio("9"), "9:16");
        assert_eq!(normalize_aspect_ratio("16"), "16:9");
        assert_eq!(normalize_aspect_ratio("4"), "4:3");
        assert_eq!(normalize_aspect_ratio("3"), "3:4");
        assert_eq!(normalize_aspect_ratio("1"), "1:1");
        assert_eq!(normalize_aspect_ratio("16:9"), "16:9");
        assert_eq!(normalize_aspect_ratio("2:3"), "2:3");
    }

    #[test]
    fn ratio_and_resolution_support() {
        assert!(is_supported_aspect_ratio("9:16"));
        assert!(!is_supported_aspect_ratio("2:3"));
        assert!(is_supported_resolution("720p"));
        assert!(!is_supported_resolution("1080p"));
    }
}
