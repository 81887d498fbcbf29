#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LineCap {
    #[default]
    Butt = 0,
    Round = 1,
    Square = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LineJoin {
    #[default]
    Miter = 0,
    Round = 1,
    Bevel = 2,
}

/// Rule deciding which regions a fill or clip covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// What to do with a path once it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawOptions {
    pub fill: bool,
    pub stroke: bool,
}

impl DrawOptions {
    pub fn fill() -> Self {
        Self {
            fill: true,
            stroke: false,
        }
    }

    pub fn stroke() -> Self {
        Self {
            fill: false,
            stroke: true,
        }
    }

    pub fn fill_and_stroke() -> Self {
        Self {
            fill: true,
            stroke: true,
        }
    }

    /// `f`, `S` or `B`; with neither flag set the path is stroked.
    pub fn paint_operator(&self, rule: WindingRule) -> &'static str {
        match (self.fill, self.stroke, rule) {
            (true, true, WindingRule::NonZero) => "B",
            (true, true, WindingRule::EvenOdd) => "B*",
            (true, false, WindingRule::NonZero) => "f",
            (true, false, WindingRule::EvenOdd) => "f*",
            (false, _, _) => "S",
        }
    }
}

/// Gap and phase of a dash pattern. The gap defaults to the dash length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashOptions {
    pub space: Option<f64>,
    pub phase: f64,
}
