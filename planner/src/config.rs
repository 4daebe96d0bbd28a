use shared::models::{Position, TableShape};

/// Planner configuration - defaults applied by the seating planner
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PLANNER_DEFAULT_SEATS_CIRCLE | 8 | Seats for a new round table |
/// | PLANNER_DEFAULT_SEATS_SQUARE | 4 | Seats for a new square table |
/// | PLANNER_DEFAULT_SEATS_RECTANGLE | 10 | Seats for a new long table |
/// | PLANNER_LAYOUT_COLUMNS | 4 | Tables per row when auto-placing |
/// | PLANNER_LAYOUT_SPACING | 200.0 | Distance between auto-placed tables |
/// | PLANNER_MAX_GROUP_SIZE | 20 | Largest guest group added at once |
/// | PLANNER_PLUS_ONE_SUFFIX | 's Guest | Suffix for synthesized plus-one names |
///
/// # Example
///
/// ```ignore
/// PLANNER_DEFAULT_SEATS_CIRCLE=10 PLANNER_LAYOUT_COLUMNS=6 cargo test
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub default_seats_circle: u32,
    pub default_seats_square: u32,
    pub default_seats_rectangle: u32,
    /// Auto-placement grid width, in tables
    pub layout_columns: u32,
    /// Auto-placement grid step, in canvas units
    pub layout_spacing: f64,
    pub max_group_size: usize,
    pub plus_one_suffix: String,
}

impl PlannerConfig {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::builtin();
        Self {
            default_seats_circle: env_parse("PLANNER_DEFAULT_SEATS_CIRCLE")
                .unwrap_or(defaults.default_seats_circle),
            default_seats_square: env_parse("PLANNER_DEFAULT_SEATS_SQUARE")
                .unwrap_or(defaults.default_seats_square),
            default_seats_rectangle: env_parse("PLANNER_DEFAULT_SEATS_RECTANGLE")
                .unwrap_or(defaults.default_seats_rectangle),
            layout_columns: env_parse::<u32>("PLANNER_LAYOUT_COLUMNS")
                .filter(|c| *c > 0)
                .unwrap_or(defaults.layout_columns),
            layout_spacing: env_parse("PLANNER_LAYOUT_SPACING").unwrap_or(defaults.layout_spacing),
            max_group_size: env_parse("PLANNER_MAX_GROUP_SIZE").unwrap_or(defaults.max_group_size),
            plus_one_suffix: std::env::var("PLANNER_PLUS_ONE_SUFFIX")
                .unwrap_or(defaults.plus_one_suffix),
        }
    }

    /// Built-in defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            default_seats_circle: 8,
            default_seats_square: 4,
            default_seats_rectangle: 10,
            layout_columns: 4,
            layout_spacing: 200.0,
            max_group_size: 20,
            plus_one_suffix: "'s Guest".to_string(),
        }
    }

    /// Seat count for a new table of `shape` when none was given
    pub fn default_seats(&self, shape: TableShape) -> u32 {
        match shape {
            TableShape::Circle => self.default_seats_circle,
            TableShape::Square => self.default_seats_square,
            TableShape::Rectangle => self.default_seats_rectangle,
        }
    }

    /// Grid slot for the `index`-th table (row-major)
    pub fn layout_position(&self, index: usize) -> Position {
        let columns = self.layout_columns.max(1) as usize;
        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        Position::new(col * self.layout_spacing, row * self.layout_spacing)
    }

    /// Synthesized name of `name`'s plus-one
    pub fn plus_one_name(&self, name: &str) -> String {
        format!("{}{}", name, self.plus_one_suffix)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
