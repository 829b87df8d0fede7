/// Bookshop diorama: two strolling avatars with timed dialogue, clickable
/// shelf hotspots, a welcome gate, and the word-guess game behind the plain
/// box on the upper shelf.
///
/// The page owns the modals (welcome form, reading panel, game grid) and
/// reports their button presses back as custom events.

use diorama_engine::*;
use glam::Vec2;

use crate::shop;

// ── Custom event kinds from the page ─────────────────────────────────

/// Welcome form submitted. Any submission is accepted.
const CUSTOM_WELCOME_SUBMIT: u32 = 1;
/// Reading panel dismissed (close button or backdrop click).
const CUSTOM_CLOSE_PANEL: u32 = 2;
/// "New round" button in the word-game modal.
const CUSTOM_NEW_ROUND: u32 = 3;
/// Word-game modal dismissed.
const CUSTOM_CLOSE_GAME: u32 = 4;

// ── Scene event kinds to the page ────────────────────────────────────

const EVENT_GATE_CLEARED: f32 = 1.0;
/// `a` carries the hotspot id.
const EVENT_PANEL_OPENED: f32 = 2.0;
const EVENT_PANEL_CLOSED: f32 = 3.0;
const EVENT_GAME_OPENED: f32 = 4.0;
const EVENT_GAME_CLOSED: f32 = 5.0;
/// `a` carries the scored row index.
const EVENT_ROW_SCORED: f32 = 6.0;
/// `a` is 1.0 on a win, 0.0 on a loss.
const EVENT_GAME_OVER: f32 = 7.0;

// ── View kinds ───────────────────────────────────────────────────────

/// `view(VIEW_WORD_GAME)` returns the word-game grid/keyboard JSON.
const VIEW_WORD_GAME: u32 = 1;

// ── Scene struct ─────────────────────────────────────────────────────

/// Image handles resolved when the manifest is built.
struct ShopImages {
    backdrop: ImageId,
    avatar_a: FacingSet,
    avatar_b: FacingSet,
    book: ImageId,
}

pub struct Bookshop {
    /// True until the page reports the welcome form was submitted.
    /// While gated, pointer and key input is ignored.
    gated: bool,
    /// Clickable regions layered over the shelf art.
    hotspots: Vec<Hotspot>,
    /// Word-guessing game. `game_open` mirrors the page's game modal.
    game: WordGame,
    game_open: bool,

    // Dialogue
    dialogue_a: DialogueCycler,
    dialogue_b: DialogueCycler,
    /// Live bubble overlay per avatar. A new line dismisses the old bubble.
    bubble_a: Option<u32>,
    bubble_b: Option<u32>,

    // Entity IDs (set during init)
    avatar_a: Option<EntityId>,
    avatar_b: Option<EntityId>,

    // Images
    manifest: ImageManifest,
    images: ShopImages,
}

/// Owned copies of a dialogue script.
fn script(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

impl Bookshop {
    pub fn new() -> Self {
        let mut manifest = ImageManifest::new();
        let backdrop = manifest.add("backdrop", "images/bookshop.png");
        let a_idle = manifest.add("avatar", "images/avatar.png");
        let a_left = manifest.add("avatar-left", "images/avatar-left.png");
        let a_right = manifest.add("avatar-right", "images/avatar-right.png");
        let b_idle = manifest.add("avatar2", "images/avatar2.png");
        let b_left = manifest.add("avatar2-left", "images/avatar2-left.png");
        let b_right = manifest.add("avatar2-right", "images/avatar2-right.png");
        let book = manifest.add("book", "images/book.png");

        let images = ShopImages {
            backdrop,
            avatar_a: FacingSet {
                left: a_left,
                right: a_right,
                idle: a_idle,
            },
            avatar_b: FacingSet {
                left: b_left,
                right: b_right,
                idle: b_idle,
            },
            book,
        };

        let words = WordList::new(shop::ANSWER_WORDS).expect("ANSWER_WORDS is a valid word pool");

        Self {
            gated: true,
            hotspots: shop::hotspots(images.book),
            game: WordGame::new(words),
            game_open: false,

            dialogue_a: DialogueCycler::new(
                script(&shop::LINES_A),
                shop::FIRST_LINE_DELAY_A,
                shop::LINE_PERIOD,
                shop::BUBBLE_SHOW_FOR,
            ),
            dialogue_b: DialogueCycler::new(
                script(&shop::LINES_B),
                shop::FIRST_LINE_DELAY_B,
                shop::LINE_PERIOD,
                shop::BUBBLE_SHOW_FOR,
            ),
            bubble_a: None,
            bubble_b: None,

            avatar_a: None,
            avatar_b: None,

            manifest,
            images,
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────

    /// Spawn one walking avatar and return its stage ID.
    fn spawn_avatar(
        ctx: &mut SceneContext,
        tag: &str,
        waypoints: &[(f32, f32)],
        speed: f32,
        facing: FacingSet,
    ) -> Option<EntityId> {
        let points = waypoints.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        let route = Route::new(points)?;
        let id = ctx.next_id();
        ctx.stage.spawn(
            Entity::new(id)
                .with_tag(tag)
                .with_pos(route.start())
                .with_size(Vec2::splat(shop::AVATAR_SIZE))
                .with_sprite(Sprite::new(facing.idle))
                .with_walker(Walker::new(route, speed).with_facing(facing)),
        );
        Some(id)
    }

    /// Tick one dialogue cycle and raise a bubble over its avatar when a
    /// line fires. Any previous bubble for that avatar is dismissed first.
    fn run_dialogue(
        ctx: &mut SceneContext,
        dialogue: &mut DialogueCycler,
        bubble: &mut Option<u32>,
        avatar: Option<EntityId>,
        dt: f32,
    ) {
        let show_for = dialogue.show_for();
        let Some(line) = dialogue.tick(dt) else {
            return;
        };
        let Some(anchor) = Self::bubble_anchor(ctx, avatar) else {
            return;
        };
        if let Some(old) = bubble.take() {
            ctx.overlays.dismiss(old);
        }
        *bubble = Some(ctx.overlays.bubble(line, anchor, show_for));
    }

    /// Bubbles hang just above the avatar's head.
    fn bubble_anchor(ctx: &SceneContext, avatar: Option<EntityId>) -> Option<Vec2> {
        let entity = ctx.stage.get(avatar?)?;
        Some(entity.pos + Vec2::new(0.0, -entity.size.y * 0.5))
    }

    /// Feed one key to the game and report scoring transitions.
    fn feed_game_key(&mut self, ctx: &mut SceneContext, key: GuessKey) {
        if let KeyOutcome::RowScored(row) = self.game.handle_key(key) {
            ctx.emit_event(SceneEvent::with_a(EVENT_ROW_SCORED, row as f32));
            match self.game.phase() {
                GamePhase::Won => {
                    log::info!("Word game won on row {}", row + 1);
                    ctx.emit_event(SceneEvent::with_a(EVENT_GAME_OVER, 1.0));
                }
                GamePhase::Lost => {
                    log::info!("Word game lost");
                    ctx.emit_event(SceneEvent::with_a(EVENT_GAME_OVER, 0.0));
                }
                _ => {}
            }
        }
    }
}

impl Scene for Bookshop {
    fn config(&self) -> SceneConfig {
        SceneConfig {
            world_width: shop::WORLD_WIDTH,
            world_height: shop::WORLD_HEIGHT,
            ..SceneConfig::default()
        }
    }

    fn manifest(&self) -> ImageManifest {
        self.manifest.clone()
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        let backdrop = ctx.next_id();
        ctx.stage.spawn(
            Entity::new(backdrop)
                .with_tag("backdrop")
                .with_pos(Vec2::new(shop::WORLD_WIDTH / 2.0, shop::WORLD_HEIGHT / 2.0))
                .with_size(Vec2::new(shop::WORLD_WIDTH, shop::WORLD_HEIGHT))
                .with_layer(RenderLayer::Backdrop)
                .with_sprite(Sprite::new(self.images.backdrop)),
        );

        self.avatar_a =
            Self::spawn_avatar(ctx, "avatar-a", &shop::ROUTE_A, shop::SPEED_A, self.images.avatar_a);
        self.avatar_b =
            Self::spawn_avatar(ctx, "avatar-b", &shop::ROUTE_B, shop::SPEED_B, self.images.avatar_b);

        log::info!("Shop stage ready ({} hotspots)", self.hotspots.len());
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    // Modals (welcome, panel, game) sit over the scene and
                    // swallow pointer input.
                    if self.gated || self.game_open || ctx.panel().is_some() {
                        continue;
                    }
                    let Some(hotspot) = hit(&self.hotspots, *x, *y) else {
                        continue;
                    };
                    match hotspot.action {
                        HotspotAction::OpenPanel => {
                            ctx.open_panel(PanelView {
                                image: hotspot.image,
                                text: hotspot.text.clone(),
                            });
                            ctx.emit_event(SceneEvent::with_a(
                                EVENT_PANEL_OPENED,
                                hotspot.id as f32,
                            ));
                        }
                        HotspotAction::OpenMiniGame => {
                            self.game.start(&mut ctx.rng);
                            self.game_open = true;
                            ctx.emit_event(SceneEvent::new(EVENT_GAME_OPENED));
                        }
                        HotspotAction::SparkleBurst => {
                            let center = hotspot.rect.center();
                            ctx.effects.spawn_burst([center.x, center.y]);
                            let label = hotspot.text.as_deref().unwrap_or("BOOM!");
                            ctx.overlays.caption(label, center, shop::BOOM_LABEL_TTL);
                        }
                        HotspotAction::FloatLabel => {
                            let center = hotspot.rect.center();
                            let label = hotspot.text.as_deref().unwrap_or("zzzz");
                            ctx.overlays.drift(label, center, shop::DRIFT_TTL, shop::DRIFT_RISE);
                        }
                    }
                }
                InputEvent::KeyDown { key_code } => {
                    if self.gated {
                        continue;
                    }
                    if *key_code == shop::KEY_ESCAPE {
                        if self.game_open {
                            self.game_open = false;
                            ctx.emit_event(SceneEvent::new(EVENT_GAME_CLOSED));
                        } else if ctx.panel().is_some() {
                            ctx.close_panel();
                            ctx.emit_event(SceneEvent::new(EVENT_PANEL_CLOSED));
                        }
                        continue;
                    }
                    if !self.game_open {
                        continue;
                    }
                    if let Some(key) = GuessKey::from_key_code(*key_code) {
                        self.feed_game_key(ctx, key);
                    }
                }
                InputEvent::Custom { kind, .. } => match *kind {
                    CUSTOM_WELCOME_SUBMIT => {
                        if self.gated {
                            self.gated = false;
                            ctx.emit_event(SceneEvent::new(EVENT_GATE_CLEARED));
                            log::info!("Welcome gate cleared");
                        }
                    }
                    CUSTOM_CLOSE_PANEL => {
                        if ctx.panel().is_some() {
                            ctx.close_panel();
                            ctx.emit_event(SceneEvent::new(EVENT_PANEL_CLOSED));
                        }
                    }
                    CUSTOM_NEW_ROUND => {
                        if self.game_open {
                            self.game.start(&mut ctx.rng);
                        }
                    }
                    CUSTOM_CLOSE_GAME => {
                        if self.game_open {
                            self.game_open = false;
                            ctx.emit_event(SceneEvent::new(EVENT_GAME_CLOSED));
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // ── Walk and talk ────────────────────────────────────────────
        // The welcome gate blocks input, not the diorama itself.
        tick_walkers(&mut ctx.stage, dt);
        Self::run_dialogue(ctx, &mut self.dialogue_a, &mut self.bubble_a, self.avatar_a, dt);
        Self::run_dialogue(ctx, &mut self.dialogue_b, &mut self.bubble_b, self.avatar_b, dt);
    }

    fn view(&self, kind: u32) -> Option<String> {
        match kind {
            VIEW_WORD_GAME => serde_json::to_string(&self.game.view()).ok(),
            _ => None,
        }
    }
}
