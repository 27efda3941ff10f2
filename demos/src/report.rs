use std::io::Write;
use std::time::Duration;

use gridstar_core::Point;

pub const HEADER: [&str; 6] = [
    "e",
    "startCoords",
    "endCoords",
    "res x/y",
    "numOfObstacles",
    "time",
];

/// One row of the timing table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    pub start: Point,
    pub goal: Point,
    pub width: i32,
    pub height: i32,
    pub obstacles: usize,
    pub elapsed: Duration,
}

impl Row {
    fn record(&self) -> [String; 6] {
        [
            self.index.to_string(),
            format!("[{},{}]", self.start.x, self.start.y),
            format!("[{},{}]", self.goal.x, self.goal.y),
            format!("{},{}", self.width, self.height),
            self.obstacles.to_string(),
            format!("{}[s]", self.elapsed.as_secs_f64()),
        ]
    }
}

pub fn write_table<W: Write>(rows: &[Row], delimiter: u8, out: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row.record())?;
    }
    wtr.flush()?;
    Ok(())
}
