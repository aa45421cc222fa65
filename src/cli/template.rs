//! Template commands: print one template, or list the catalogue

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::templates::{Template, TemplateParams, generate_code};

/// Print the named template with `name` substituted
pub fn run_template(template: &str, name: Option<&str>) -> i32 {
    let params = TemplateParams {
        name: name.map(str::to_string),
    };

    match generate_code(template, &params) {
        Ok(code) => {
            println!("{code}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// List every template with its description
pub fn run_templates() -> i32 {
    print!("{}", format_template_list());
    EXIT_SUCCESS
}

fn format_template_list() -> String {
    let mut output = String::from("Available templates:\n");
    for template in Template::all() {
        output.push_str(&format!(
            "  {:<14} {}\n",
            template.name(),
            template.description()
        ));
    }
    output
}
