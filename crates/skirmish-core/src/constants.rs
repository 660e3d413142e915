//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in arena units.
pub const ARENA_WIDTH: f32 = 512.0;

/// Arena height in arena units.
pub const ARENA_HEIGHT: f32 = 512.0;

/// Staging point where summoned units appear (arena center).
pub const STAGING_X: f32 = ARENA_WIDTH / 2.0;
pub const STAGING_Y: f32 = ARENA_HEIGHT / 2.0;

/// Depth of the border bands hostile spawns are drawn from.
pub const SPAWN_EDGE_MARGIN: f32 = 10.0;

// --- Steering ---

/// Radius within which same-faction units repel each other.
pub const AVOID_RADIUS: f32 = 15.0;

// --- Economy ---

/// Currency awarded per hostile kill.
pub const KILL_BOUNTY: u32 = 1;

/// Difficulty added per hostile kill.
pub const DIFFICULTY_PER_KILL: f32 = 0.1;

/// Difficulty at the start of a run. The wave director keeps the hostile
/// population at `round(difficulty)`.
pub const STARTING_DIFFICULTY: f32 = 1.0;

/// Currency at the start of a run.
pub const STARTING_CURRENCY: u32 = 0;

// --- Waves ---

/// Difficulty at which elite hostiles may replace a base spawn.
pub const ELITE_DIFFICULTY: f32 = 3.0;

/// Difficulty at which champion hostiles may replace a base spawn.
pub const CHAMPION_DIFFICULTY: f32 = 5.0;

/// Window for the elite/champion override roll (uniform in 1..=WINDOW;
/// 1 promotes to champion when unlocked, 1 or 2 promote to elite).
pub const ELITE_ROLL_WINDOW: u32 = 3 * TICK_RATE;

/// Maximum per-axis offset of a raised minion from its summoner.
pub const MINION_JITTER: f32 = 5.0;

// --- Projectiles ---

/// Ticks a fireball's explosion stays live after impact (animation window).
pub const EXPLOSION_TICKS: u32 = 64;

// --- Starting forces ---

/// Number of units in the starting band.
pub const STARTING_BAND_SIZE: usize = 5;

/// Offset of the four flanking units in the starting band.
pub const STARTING_BAND_OFFSET: f32 = 10.0;
