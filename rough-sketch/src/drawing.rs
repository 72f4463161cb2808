//! Drawing records handed to a downstream renderer.
//!
//! A [`Drawing`] is a flat list of pen instructions replayed in order:
//! `Move` starts a new contour, `LineTo` and `CubicCurveTo` extend it from
//! the last position.

use crate::geometry::Point;

/// One pen instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Move(Point),
    LineTo(Point),
    CubicCurveTo { ctrl1: Point, ctrl2: Point, to: Point },
}

impl Instruction {
    /// Where the pen rests after this instruction.
    #[inline]
    pub fn end_point(&self) -> Point {
        match *self {
            Instruction::Move(p) | Instruction::LineTo(p) => p,
            Instruction::CubicCurveTo { to, .. } => to,
        }
    }

    /// True for `Move`.
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Instruction::Move(_))
    }
}

/// How the renderer should paint a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingKind {
    /// Stroke the outline.
    StrokePath,
    /// Fill the enclosed region.
    FillPath,
}

/// The result of one primitive call.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub kind: DrawingKind,
    pub instructions: Vec<Instruction>,
}

impl Drawing {
    /// A stroke drawing.
    pub fn stroke(instructions: Vec<Instruction>) -> Self {
        Self { kind: DrawingKind::StrokePath, instructions }
    }

    /// A fill drawing.
    pub fn fill(instructions: Vec<Instruction>) -> Self {
        Self { kind: DrawingKind::FillPath, instructions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of contours (`Move` instructions).
    pub fn contour_count(&self) -> usize {
        self.instructions.iter().filter(|op| op.is_move()).count()
    }

    /// Serialize as SVG path data (the `d=""` attribute).
    ///
    /// Coordinates use two decimals, matching the CLI's other SVG output.
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::with_capacity(self.instructions.len() * 24);
        for (i, op) in self.instructions.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            match op {
                Instruction::Move(p) => d.push_str(&format!("M{:.2} {:.2}", p.x, p.y)),
                Instruction::LineTo(p) => d.push_str(&format!("L{:.2} {:.2}", p.x, p.y)),
                Instruction::CubicCurveTo { ctrl1, ctrl2, to } => d.push_str(&format!(
                    "C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )),
            }
        }
        d
    }
}
