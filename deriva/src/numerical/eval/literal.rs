use crate::numerical::{ctxt::Ctxt, error::kind::UndefinedVariable};
use crate::parser::ast::{Constant, Variable};
use deriva_error::Error;
use super::Eval;

impl Eval for Constant {
    fn eval(&self, _ctxt: &Ctxt) -> Result<f64, Error> {
        Ok(self.value)
    }
}

impl Eval for Variable {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        ctxt.get_var(&self.name).ok_or_else(|| {
            Error::spanless(UndefinedVariable {
                name: self.name.clone(),
            })
        })
    }
}
