/// Expected totals closer than this to the observed total are used without rescaling.
pub const RESCALE_TOLERANCE: f64 = 1e-5;
pub const MIN_CATEGORIES: usize = 2;
pub const MIN_INTRINSIC_CATEGORIES: usize = 3;
pub const DEFAULT_ALPHA: f64 = 0.05;
