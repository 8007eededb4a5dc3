use crate::evaluate::EvaluationResult;
use crate::explanation::{AUDIENCE, Explanation, INTRODUCTION, explanations_for};
use crate::function::FunctionKind;
use gradviz_common::geom::point::Point;
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientReport {
    pub function: FunctionKind,
    pub point: Point<f64>,
    pub gradient: Point<f64>,
    pub magnitude: f64,
}

impl From<&EvaluationResult> for GradientReport {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            function: result.function,
            point: result.point,
            gradient: result.gradient,
            magnitude: result.magnitude,
        }
    }
}

impl GradientReport {
    pub fn to_markdown(&self) -> String {
        format!(
            "**Gradient at ({:.2}, {:.2})**  \n\\[\n\\nabla f = ({:.2}, {:.2})\n\\]\n\n\
             **Magnitude of gradient:**  \n\\[\n|\\nabla f| = {:.2}\n\\]\n",
            self.point.x, self.point.y, self.gradient.x, self.gradient.y, self.magnitude
        )
    }

    pub fn to_markdown_with_explanations(&self) -> String {
        let mut out = format!("# {}\n\n{}\n\n", INTRODUCTION.title, INTRODUCTION.body);
        let _ = writeln!(out, "## {}\n", self.function.spec().latex);
        out.push_str(&self.to_markdown());
        for block in explanations_for(self.function) {
            out.push('\n');
            push_markdown(&mut out, block);
        }
        let _ = writeln!(out, "\n---\n*{}*", AUDIENCE.body);
        out
    }
}

impl fmt::Display for GradientReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.function)?;
        writeln!(f, "Gradient at ({:.2}, {:.2})", self.point.x, self.point.y)?;
        writeln!(f, "  ∇f = ({:.2}, {:.2})", self.gradient.x, self.gradient.y)?;
        write!(f, "  |∇f| = {:.2}", self.magnitude)
    }
}

fn push_markdown(out: &mut String, block: &Explanation) {
    let _ = writeln!(out, "### {}\n", block.title);
    if let Some(formula) = block.formula {
        let _ = writeln!(out, "\\[\n{}\n\\]\n", formula);
    }
    let _ = writeln!(out, "{}", block.body);
}

pub fn explanation_text(kind: FunctionKind) -> String {
    let mut out = String::new();
    for block in explanations_for(kind) {
        let _ = writeln!(out, "{}\n{}\n", block.title, "-".repeat(block.title.chars().count()));
        let _ = writeln!(out, "{}\n", block.body);
    }
    out
}
