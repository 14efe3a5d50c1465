pub mod binary;
pub mod call;
pub mod equation;
pub mod expr;
pub mod literal;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use equation::Equation;
pub use expr::Expr;
pub use literal::{LitNum, LitSym};
pub use unary::Unary;
