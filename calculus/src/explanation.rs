use crate::function::FunctionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explanation {
    pub title: &'static str,
    pub formula: Option<&'static str>,
    pub body: &'static str,
}

pub const INTRODUCTION: Explanation = Explanation {
    title: "Gradient and Steepest Ascent Visualisation",
    formula: None,
    body: "\
This interactive app helps you understand gradients of functions of two variables
and why the gradient gives the direction of steepest ascent.",
};

pub const AUDIENCE: Explanation = Explanation {
    title: "Audience",
    formula: None,
    body: "Designed for undergraduate multivariable calculus students",
};

pub const GRADIENT_DEFINITION: Explanation = Explanation {
    title: "What does the gradient represent?",
    formula: Some(r"\nabla f = \left( \frac{\partial f}{\partial x}, \frac{\partial f}{\partial y} \right)"),
    body: "\
The gradient of a function f(x, y) is the vector of its partial derivatives.

It tells us:
- how fast the function increases in the x-direction
- how fast the function increases in the y-direction

So the gradient combines both rates of change into one vector.",
};

pub const STEEPEST_ASCENT: Explanation = Explanation {
    title: "Why does the gradient give the direction of steepest ascent?",
    formula: Some(r"D_{\mathbf{u}} f = \nabla f \cdot \mathbf{u} \le |\nabla f|"),
    body: "\
The gradient vector always points in the direction where the function
increases most rapidly.

- Moving in the direction of the gradient increases the function value as fast as possible.
- The magnitude of the gradient tells us how steep the surface is at that point.

The rate of change along a unit direction u is the dot product of the
gradient with u. It is largest when u points along the gradient, and the
largest rate equals the gradient's magnitude. This is why the gradient is
called the direction of steepest ascent.",
};

pub const CUBIC_WALKTHROUGH: Explanation = Explanation {
    title: "Worked example: f(x, y) = x²y + y",
    formula: Some(r"\nabla f = \left( 2xy,\; x^2 + 1 \right)"),
    body: "\
Differentiate one variable at a time, treating the other as a constant:

- Holding y fixed, x²y changes like a multiple of x², so the x-partial is 2xy.
- Holding x fixed, x²y + y is (x² + 1) times y, so the y-partial is x² + 1.

Because x² + 1 is at least 1 everywhere, the gradient is never the zero
vector. The surface has no flat spot, so there is no local maximum or
minimum anywhere. Along the line y = 0 the x-partial vanishes and the
gradient points straight in the y-direction with length x² + 1.",
};

pub fn explanations_for(kind: FunctionKind) -> Vec<&'static Explanation> {
    let mut blocks = vec![&GRADIENT_DEFINITION, &STEEPEST_ASCENT];
    blocks.extend(kind.spec().extended);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_blocks_come_first() {
        for kind in FunctionKind::ALL {
            let blocks = explanations_for(kind);
            assert_eq!(blocks[0], &GRADIENT_DEFINITION);
            assert_eq!(blocks[1], &STEEPEST_ASCENT);
        }
    }

    #[test]
    fn cubic_adds_its_walkthrough() {
        assert_eq!(explanations_for(FunctionKind::Paraboloid).len(), 2);
        let blocks = explanations_for(FunctionKind::Cubic);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2].title, CUBIC_WALKTHROUGH.title);
    }
}
