/// Shop layout data: world size, avatar routes, dialogue scripts, clickable
/// hotspots and the word-game answer pool.
///
/// All coordinates are world pixels with the origin at the top-left of the
/// 800x600 shop backdrop.

use diorama_engine::{Hotspot, HotspotAction, ImageId, Rect};

// ── World ────────────────────────────────────────────────────────────

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Avatars render as square sprites of this side length.
pub const AVATAR_SIZE: f32 = 96.0;

// ── Avatars ──────────────────────────────────────────────────────────

/// Waypoints for the browsing avatar, a short loop by the mystery shelf.
pub const ROUTE_A: [(f32, f32); 2] = [(260.0, 300.0), (340.0, 270.0)];
/// Walking speed in pixels per second.
pub const SPEED_A: f32 = 20.0;

/// Waypoints for the reading avatar, an amble along the back aisle.
pub const ROUTE_B: [(f32, f32); 2] = [(450.0, 490.0), (480.0, 460.0)];
pub const SPEED_B: f32 = 15.0;

/// Dialogue script for the browsing avatar, spoken in order.
pub const LINES_A: [&str; 4] = [
    "Lovely day for a read!",
    "Currently reading 'My Brilliant Friend'",
    "Can't wait to start my DPhil!",
    "I recommend the mystery shelf.",
];

/// Dialogue script for the reading avatar.
pub const LINES_B: [&str; 4] = [
    "Quiet please — I've got a biography to read.",
    "I'm definitely punching!",
    "This aisle has rare editions.",
    "Grab a tea and enjoy the book.",
];

/// Seconds until each avatar's first line. The offsets keep the two
/// dialogue cycles staggered.
pub const FIRST_LINE_DELAY_A: f32 = 30.0;
pub const FIRST_LINE_DELAY_B: f32 = 17.8;
/// Seconds between lines once a cycle is running.
pub const LINE_PERIOD: f32 = 30.0;
/// Seconds a speech bubble stays visible.
pub const BUBBLE_SHOW_FOR: f32 = 5.0;

// ── Hotspots ─────────────────────────────────────────────────────────

/// Stable hotspot identifiers, echoed in scene events.
pub const HOTSPOT_DIARY: u32 = 2;
pub const HOTSPOT_SCRAPBOOK: u32 = 3;
pub const HOTSPOT_WORD_GAME: u32 = 4;
pub const HOTSPOT_THESIS: u32 = 5;
pub const HOTSPOT_BOOM: u32 = 6;
pub const HOTSPOT_DOG: u32 = 7;

const DIARY_TEXT: &str = "Dear diary, I miss my boyfriend.";
const SCRAPBOOK_TEXT: &str = "Boston 2025 Scrapbook!";
const THESIS_TEXT: &str = "The Digital Divide in Education: Investigating the \
                           Effect of Poor Internet Connectivity on Post-COVID \
                           Educational Outcomes";

/// Build the clickable hotspots. `book` is the close-up image shown in
/// reading panels.
pub fn hotspots(book: ImageId) -> Vec<Hotspot> {
    vec![
        Hotspot::new(
            HOTSPOT_DIARY,
            Rect::new(270.0, 250.0, 30.0, 30.0),
            HotspotAction::OpenPanel,
        )
        .with_image(book)
        .with_text(DIARY_TEXT),
        Hotspot::new(
            HOTSPOT_SCRAPBOOK,
            Rect::new(260.0, 485.0, 30.0, 30.0),
            HotspotAction::OpenPanel,
        )
        .with_image(book)
        .with_text(SCRAPBOOK_TEXT),
        Hotspot::new(
            HOTSPOT_WORD_GAME,
            Rect::new(140.0, 170.0, 30.0, 30.0),
            HotspotAction::OpenMiniGame,
        ),
        Hotspot::new(
            HOTSPOT_THESIS,
            Rect::new(470.0, 260.0, 30.0, 30.0),
            HotspotAction::OpenPanel,
        )
        .with_image(book)
        .with_text(THESIS_TEXT),
        Hotspot::new(
            HOTSPOT_BOOM,
            Rect::new(340.0, 70.0, 10.0, 30.0),
            HotspotAction::SparkleBurst,
        )
        .with_text("BOOM"),
        Hotspot::new(
            HOTSPOT_DOG,
            Rect::new(140.0, 510.0, 30.0, 30.0),
            HotspotAction::FloatLabel,
        )
        .with_text("ZZZ"),
    ]
}

// ── Labels ───────────────────────────────────────────────────────────

/// Burst caption lifetime in seconds, matching the burst itself.
pub const BOOM_LABEL_TTL: f32 = 1.2;
/// Drifting label lifetime in seconds and rise speed in pixels per second.
pub const DRIFT_TTL: f32 = 2.0;
pub const DRIFT_RISE: f32 = 20.0;

// ── Word game ────────────────────────────────────────────────────────

/// Answer pool for the guessing game. Every entry is five uppercase letters.
pub const ANSWER_WORDS: [&str; 6] = ["LOVEU", "DREAM", "HELLO", "FLAME", "HENRY", "BITCH"];

// ── Keys ─────────────────────────────────────────────────────────────

/// DOM key code for Escape, which closes panels and the word game.
pub const KEY_ESCAPE: u32 = 27;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_have_two_waypoints_inside_the_world() {
        for &(x, y) in ROUTE_A.iter().chain(ROUTE_B.iter()) {
            assert!(x >= 0.0 && x <= WORLD_WIDTH);
            assert!(y >= 0.0 && y <= WORLD_HEIGHT);
        }
        assert!(ROUTE_A.len() >= 2);
        assert!(ROUTE_B.len() >= 2);
    }

    #[test]
    fn answer_words_are_five_uppercase_letters() {
        for word in ANSWER_WORDS {
            assert_eq!(word.len(), 5, "bad length: {word}");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "bad letters: {word}"
            );
        }
    }

    #[test]
    fn hotspot_ids_are_unique() {
        let hotspots = hotspots(ImageId(0));
        for (i, a) in hotspots.iter().enumerate() {
            for b in &hotspots[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn reading_panels_carry_an_image_and_a_caption() {
        for hotspot in hotspots(ImageId(3)) {
            if hotspot.action == HotspotAction::OpenPanel {
                assert_eq!(hotspot.image, Some(ImageId(3)));
                assert!(hotspot.text.is_some());
            }
        }
    }

    #[test]
    fn hotspots_sit_inside_the_world() {
        for hotspot in hotspots(ImageId(0)) {
            let center = hotspot.rect.center();
            assert!(center.x > 0.0 && center.x < WORLD_WIDTH);
            assert!(center.y > 0.0 && center.y < WORLD_HEIGHT);
        }
    }
}
