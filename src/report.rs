//! Plain-text rendering of solutions and ladder specs.

use std::fmt;

use crate::codes::ColorCode;
use crate::ladder::LadderSpec;
use crate::value::{engineering, rkm};
use crate::{Entry, Solution};

const LEGEND: &str = "\
-- Color Code Reference --
Digits: Black=0, Brown=1, Red=2, Orange=3, Yellow=4
        Green=5, Blue=6, Violet=7, Grey=8, White=9
Tolerance: Gold=5%, Brown=1%, Red=2%, Silver=10%
";

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:.2} Ω: 4-band: {} | 5-band: {} | SMD: {}",
            self.value, self.four_band, self.five_band, self.smd
        )
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} = {:.2} Ω ({} resistor{}, error {:.2}%)",
            self.expression,
            self.resistance,
            self.component_count,
            if self.component_count > 1 { "s" } else { "" },
            self.error_percent
        )?;
        if !self.codes.is_empty() {
            write!(f, "\n    Component resistor codes:")?;
            for code in &self.codes {
                write!(f, "\n      {}", code)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "-- Networks within {:.2}% tolerance of {:.2} Ω --",
            self.tolerance, self.target
        )?;
        writeln!(
            f,
            "   Found {} combinations, showing top {} sorted by error\n",
            self.total,
            self.entries.len()
        )?;

        for (idx, entry) in self.entries.iter().enumerate() {
            if idx < self.top_codes {
                write!(f, "#{} ", idx + 1)?;
            }
            writeln!(f, "{}\n", entry)?;
        }

        if self.hidden() > 0 {
            writeln!(f, "... and {} more results\n", self.hidden())?;
        }
        if !self.found() {
            writeln!(f, "No network found within the specified tolerance.")?;
        }

        write!(f, "\n{}", LEGEND)
    }
}

impl fmt::Display for LadderSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "-- R-2R ladder: {} bits, Vref {:.2} V --",
            self.bits, self.vref
        )?;
        writeln!(
            f,
            "R  = {:<6} x {:<2}  {} | SMD: {}",
            rkm(self.r),
            self.r_count,
            self.r_code.four_band,
            self.r_code.smd
        )?;
        writeln!(
            f,
            "2R = {:<6} x {:<2}  {} | SMD: {}",
            rkm(self.r2),
            self.r2_count,
            self.r2_code.four_band,
            self.r2_code.smd
        )?;
        writeln!(f, "LSB: {:.6} V ({}V)", self.lsb, engineering(self.lsb))?;
        writeln!(f, "Full scale: {:.6} V", self.full_scale)?;
        writeln!(f, "Output impedance: {}Ω\n", engineering(self.output_impedance))?;

        let width = (self.bits as usize).max(4);
        writeln!(f, "{:<width$}  {:>8}  {:>10}", "Code", "Value", "Voltage", width = width)?;
        for s in &self.samples {
            writeln!(
                f,
                "{:<width$}  {:>8}  {:>10.6}",
                s.code,
                s.value,
                s.voltage,
                width = width
            )?;
        }
        Ok(())
    }
}
