use crate::numerical::ctxt::Ctxt;
use crate::parser::ast::Unary;
use crate::parser::op::UnaryOpKind;
use deriva_error::Error;
use super::Eval;

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;

        Ok(match self.op {
            UnaryOpKind::Neg => -operand,
        })
    }
}
