//! Headless renderer: the trajectory as a comma separated table on stdout

use crate::simulation::states::{AtwoodSample, CylinderSample};

/// A sample that can be printed as one table row
pub trait TableRow {
    fn header() -> &'static str;
    fn row(&self) -> String;
}

impl TableRow for AtwoodSample {
    fn header() -> &'static str {
        "t,y_right,y_left"
    }

    fn row(&self) -> String {
        format!("{:.4},{:.6},{:.6}", self.t, self.y_right, self.y_left)
    }
}

impl TableRow for CylinderSample {
    fn header() -> &'static str {
        "t,x,y,z"
    }

    fn row(&self) -> String {
        format!(
            "{:.4},{:.6},{:.6},{:.6}",
            self.t,
            self.x(),
            self.y(),
            self.z()
        )
    }
}

/// Header plus one line per sample, in order
pub fn render_table<S: TableRow>(samples: &[S]) -> String {
    let mut out = String::with_capacity((samples.len() + 1) * 32);
    out.push_str(S::header());
    out.push('\n');
    for s in samples {
        out.push_str(&s.row());
        out.push('\n');
    }
    out
}

pub fn print_table<S: TableRow>(samples: &[S]) {
    print!("{}", render_table(samples));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec3;

    #[test]
    fn atwood_rows() {
        let samples = [
            AtwoodSample { t: 0.0, y_right: -500.0, y_left: -400.0 },
            AtwoodSample { t: 1.0, y_right: -503.27, y_left: -396.73 },
        ];
        let table = render_table(&samples);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "t,y_right,y_left");
        assert_eq!(lines[1], "0.0000,-500.000000,-400.000000");
        assert_eq!(lines[2], "1.0000,-503.270000,-396.730000");
    }

    #[test]
    fn cylinder_rows() {
        let samples = [CylinderSample { t: 0.5, position: NVec3::new(0.5, 0.0, -1.0) }];
        let table = render_table(&samples);
        assert_eq!(table, "t,x,y,z\n0.5000,0.500000,0.000000,-1.000000\n");
    }

    #[test]
    fn empty_table_is_just_header() {
        let samples: [CylinderSample; 0] = [];
        assert_eq!(render_table(&samples), "t,x,y,z\n");
    }
}
