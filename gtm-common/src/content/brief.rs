//! Fixed creative-brief sections

pub const MANDATORY_CLAIMS: [&str; 3] = [
    "All natural ingredients",
    "Scientifically proven benefits",
    "Premium quality",
];

pub const VISUAL_IDEAS: [&str; 4] = [
    "Lifestyle shots showing target consumers in their natural environment",
    "Close-up product shots highlighting premium ingredients",
    "Before/after transformation stories",
    "User-generated content featuring real testimonials",
];

pub fn objective(segment_name: &str) -> String {
    format!(
        "Drive awareness and consideration among {} through compelling creative that \
         emphasizes our unique value proposition",
        segment_name
    )
}
