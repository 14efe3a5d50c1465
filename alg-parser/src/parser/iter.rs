use super::ast::expr::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Literal(_) | Expr::Variable(_) => return self.visit(),
                Expr::Call(call) => {
                    if self.is_last_visited(&call.arg) {
                        return self.visit();
                    }
                    self.stack.push(&call.arg);
                },
                Expr::Unary(unary) => {
                    if self.is_last_visited(&unary.operand) {
                        return self.visit();
                    }
                    self.stack.push(&unary.operand);
                },
                Expr::Binary(binary) => {
                    if self.is_last_visited(&binary.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&binary.rhs);
                    self.stack.push(&binary.lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_expr;

    #[test]
    fn post_order() {
        let expr = parse_expr("2x + sin(-y)").unwrap();
        let visited = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();
        assert_eq!(visited, vec!["2", "x", "2*x", "y", "-y", "sin(-y)", "2*x+sin(-y)"]);
    }
}
