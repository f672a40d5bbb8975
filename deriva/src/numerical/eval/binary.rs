use crate::numerical::ctxt::Ctxt;
use crate::parser::ast::Binary;
use crate::parser::op::BinOpKind;
use deriva_error::Error;
use super::Eval;

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let lhs = self.lhs.eval(ctxt)?;
        let rhs = self.rhs.eval(ctxt)?;

        // native IEEE-754 arithmetic: division by zero yields signed infinity or NaN, and
        // overflow propagates silently
        Ok(match self.op {
            BinOpKind::Add => lhs + rhs,
            BinOpKind::Sub => lhs - rhs,
            BinOpKind::Mul => lhs * rhs,
            BinOpKind::Div => lhs / rhs,
            BinOpKind::Exp => lhs.powf(rhs),
        })
    }
}
