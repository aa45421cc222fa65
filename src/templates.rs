#![forbid(unsafe_code)]

//! Lua code templates
//!
//! A fixed catalogue of snippets. Placeholders are `%s` and are all replaced
//! with the same value.

use crate::error::TemplateError;
use std::fmt;

const MODULE_TEMPLATE: &str = "-- Module: %s
local %s = {}
%s.__index = %s

function %s:new(...)
    local instance = {}
    setmetatable(instance, %s)
    return instance
end

return %s";

const ERROR_HANDLER_TEMPLATE: &str = r#"local function safe_call(func, ...)
    local success, result = pcall(func, ...)
    if not success then
        print("Error: " .. tostring(result))
        return nil
    end
    return result
end"#;

const PLACEHOLDER: &str = "%s";
const DEFAULT_MODULE_NAME: &str = "MyModule";

/// Parameters substituted into a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    /// Module name; `MyModule` when absent
    pub name: Option<String>,
}

impl TemplateParams {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Available code templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Module table with a metatable-backed constructor
    Module,
    /// `pcall` wrapper that reports and swallows errors
    ErrorHandler,
}

impl Template {
    pub fn all() -> [Template; 2] {
        [Template::Module, Template::ErrorHandler]
    }

    /// Looks a template up by name
    ///
    /// Accepts `error_handler` as an alias of `error-handler`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` for any other name.
    pub fn from_name(name: &str) -> Result<Self, TemplateError> {
        match name {
            "module" => Ok(Template::Module),
            "error-handler" | "error_handler" => Ok(Template::ErrorHandler),
            other => Err(TemplateError::NotFound(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Module => "module",
            Template::ErrorHandler => "error-handler",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Module => "Module table with __index and a :new constructor",
            Template::ErrorHandler => "safe_call wrapper around pcall",
        }
    }

    pub fn render(&self, params: &TemplateParams) -> String {
        match self {
            Template::Module => {
                let name = params.name.as_deref().unwrap_or(DEFAULT_MODULE_NAME);
                MODULE_TEMPLATE.replace(PLACEHOLDER, name)
            }
            Template::ErrorHandler => ERROR_HANDLER_TEMPLATE.to_string(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders the named template
///
/// # Errors
///
/// Returns `TemplateError::NotFound` when no template has that name.
pub fn generate_code(name: &str, params: &TemplateParams) -> Result<String, TemplateError> {
    Ok(Template::from_name(name)?.render(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_module_template_substitutes_every_placeholder() {
        let code = Template::Module.render(&TemplateParams::with_name("Inventory"));
        assert!(!code.contains("%s"));
        assert!(code.starts_with("-- Module: Inventory\nlocal Inventory = {}"));
        assert!(code.contains("Inventory.__index = Inventory"));
        assert!(code.contains("function Inventory:new(...)"));
        assert!(code.contains("setmetatable(instance, Inventory)"));
        assert!(code.ends_with("return Inventory"));
    }

    #[test]
    fn test_module_template_default_name() {
        let code = Template::Module.render(&TemplateParams::default());
        assert!(code.contains("local MyModule = {}"));
    }

    #[test]
    fn test_error_handler_ignores_params() {
        let plain = Template::ErrorHandler.render(&TemplateParams::default());
        let named = Template::ErrorHandler.render(&TemplateParams::with_name("X"));
        assert_eq!(plain, named);
        assert!(plain.contains("pcall(func, ...)"));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Template::from_name("module").unwrap(), Template::Module);
        assert_eq!(
            Template::from_name("error_handler").unwrap(),
            Template::ErrorHandler
        );
        assert_eq!(
            Template::from_name("error-handler").unwrap(),
            Template::ErrorHandler
        );
        assert!(matches!(
            Template::from_name("class"),
            Err(TemplateError::NotFound(name)) if name == "class"
        ));
    }

    #[test]
    fn test_generate_code_unknown() {
        assert!(generate_code("nope", &TemplateParams::default()).is_err());
    }

    #[test]
    fn test_generated_templates_analyze_cleanly() {
        for template in Template::all() {
            let report = analyze(&template.render(&TemplateParams::default()));
            assert!(report.syntax.valid, "{template} should pass the syntax check");
            assert!(report.detected_patterns.uses_local_vars);
        }
    }
}
