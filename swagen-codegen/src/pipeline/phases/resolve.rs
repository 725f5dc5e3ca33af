//! Resolve phase - builds the API model from the document.

use eyre::Result;

use crate::{
    language::NamingConvention,
    pipeline::{CompilationContext, Phase},
    resolve::{ReservedNames, Resolver},
};

/// Phase that resolves the document into an [`ApiModel`](swagen_ir::ApiModel).
pub struct ResolvePhase {
    naming: NamingConvention,
    reserved: ReservedNames,
}

impl ResolvePhase {
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            reserved: ReservedNames::default(),
        }
    }

    pub fn with_reserved(mut self, reserved: ReservedNames) -> Self {
        self.reserved = reserved;
        self
    }
}

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve references and build endpoint and type descriptors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = Resolver::with_reserved(&ctx.document, self.naming, &self.reserved).resolve();
        ctx.add_info(
            self.name(),
            format!(
                "resolved {} endpoint(s) and {} type(s)",
                model.endpoints.len(),
                model.types.len()
            ),
        );
        ctx.model = Some(model);
        Ok(())
    }
}
