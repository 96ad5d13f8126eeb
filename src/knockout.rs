//! Celebration Gallery
//!
//! The knockout GIFs shown when a task gets completed. The pick takes a
//! unit-interval sample so callers inject the randomness.

pub const KNOCKOUT_IMAGES: &[&str] = &[
    "images/knockout1.gif",
    "images/knockout2.gif",
    "images/knockout3.gif",
    "images/knockout4.gif",
    "images/knockout5.gif",
    "images/knockout6.gif",
    "images/knockout7.gif",
    "images/knockout8.gif",
    "images/knockout9.gif",
    "images/knockout10.gif",
    "images/knockout11.gif",
    "images/knockout12.gif",
    "images/knockout13.gif",
    "images/knockout14.gif",
    "images/knockout15.gif",
];

/// Map a sample in `[0, 1)` onto a gallery image, clamping anything at
/// or past 1.0 onto the last one.
pub fn pick_image(sample: f64) -> &'static str {
    let len = KNOCKOUT_IMAGES.len();
    let index = ((sample * len as f64) as usize).min(len - 1);
    KNOCKOUT_IMAGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_zero_picks_the_first_image() {
        assert_eq!(pick_image(0.0), KNOCKOUT_IMAGES[0]);
    }

    #[test]
    fn sample_near_one_picks_the_last_image() {
        assert_eq!(pick_image(0.9999), KNOCKOUT_IMAGES[14]);
    }

    #[test]
    fn out_of_range_sample_is_clamped() {
        assert_eq!(pick_image(1.0), KNOCKOUT_IMAGES[14]);
        assert_eq!(pick_image(5.0), KNOCKOUT_IMAGES[14]);
    }

    #[test]
    fn every_image_is_reachable() {
        let len = KNOCKOUT_IMAGES.len() as f64;
        for (i, expected) in KNOCKOUT_IMAGES.iter().enumerate() {
            let sample = (i as f64 + 0.5) / len;
            assert_eq!(pick_image(sample), *expected);
        }
    }
}
