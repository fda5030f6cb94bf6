//! `RankStats` tracks line and distinct-token counts for progress
//! reporting while a trace is scanned. It does no persistence.

pub struct RankStats {
    pub lines: u64,
    pub uniques: u64,
}

impl RankStats {
    pub fn new() -> Self {
        Self { lines: 0, uniques: 0 }
    }

    pub fn tick_line(&mut self, is_new: bool) {
        self.lines += 1;
        if is_new {
            self.uniques += 1;
        }
    }

    pub fn report(&self) {
        eprintln!(
            "Scanned {} lines, {} distinct LBAs",
            self.lines, self.uniques
        );
    }
}
