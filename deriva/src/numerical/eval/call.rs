use crate::numerical::{
    ctxt::Ctxt,
    error::kind::{MissingArgument, TooManyArguments, UndefinedFunction},
};
use crate::parser::ast::Call;
use deriva_error::Error;
use super::Eval;

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let definition = self.resolve(ctxt)?;

        // variadic definitions accept any argument count
        if let Some(expected) = definition.arity() {
            if self.args.len() > expected {
                return Err(Error::spanless(TooManyArguments {
                    name: self.name.clone(),
                    expected,
                    given: self.args.len(),
                }));
            }
            if self.args.len() < expected {
                return Err(Error::spanless(MissingArgument {
                    name: self.name.clone(),
                    expected,
                    given: self.args.len(),
                }));
            }
        }

        let mut values = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            values.push(arg.eval(ctxt)?);
        }

        Ok(definition.eval(&values))
    }
}

impl Call {
    /// Resolves this call's name, first against the context's local functions, then against the
    /// builtin registry.
    fn resolve(&self, ctxt: &Ctxt) -> Result<std::sync::Arc<dyn crate::funcs::Function>, Error> {
        ctxt.get_func(&self.name).ok_or_else(|| {
            Error::spanless(UndefinedFunction {
                name: self.name.clone(),
                suggestions: ctxt
                    .get_similar_funcs(&self.name)
                    .into_iter()
                    .map(|s| s.to_string())
                    .collect(),
            })
        })
    }
}
