use askama::Template;

/// Landing page, shows two fixed numbers.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HeadPage {
    pub number1: i64,
    pub number2: i64,
}

/// Sum page, shows two numbers and their total.
#[derive(Template)]
#[template(path = "body.html")]
pub struct SumPage {
    pub value1: i64,
    pub value2: i64,
    pub sum: i64,
}

impl SumPage {
    /// The total is derived here, so a rendered page can never show an
    /// inconsistent sum.
    pub fn new(value1: i64, value2: i64) -> Self {
        SumPage {
            value1,
            value2,
            sum: value1 + value2,
        }
    }
}
