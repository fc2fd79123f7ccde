//! Font loading and discovery

use femtovg::{Canvas, FontId, renderer::OpenGl};

/// Load fonts with fallbacks for the landing page
pub fn load_fonts(canvas: &mut Canvas<OpenGl>) -> Vec<FontId> {
    let mut fonts = Vec::new();

    // 1. Try common sans-serif font paths on Linux
    let sans_paths = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    ];

    for path in &sans_paths {
        if let Ok(font) = canvas.add_font(path) {
            fonts.push(font);
            break; // Use the first available sans font
        }
    }

    // 2. Add fallback fonts for extended coverage (arrows, bullets, accents)
    let fallback_paths = [
        "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    for path in &fallback_paths {
        if let Ok(font) = canvas.add_font(path) {
            fonts.push(font);
        }
    }

    if fonts.is_empty() {
        panic!(
            "No suitable font found! Please install dejavu-fonts, liberation-fonts, or fonts-droid-fallback."
        );
    }

    fonts
}
