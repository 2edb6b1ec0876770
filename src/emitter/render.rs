use super::{Artifacts, Emitter, Handler};

const HEADER: &str = "// Generated by dmgen. Do not edit.\n";

impl Emitter {
    /// Renders the declarations and definitions fragments.
    pub fn finish(self) -> Artifacts {
        let artifacts = Artifacts {
            declarations: self.render_declarations(),
            definitions: self.render_definitions(),
        };
        tracing::info!(
            declarations = artifacts.declarations.len(),
            definitions = artifacts.definitions.len(),
            "rendered artifacts"
        );
        artifacts
    }

    fn handlers(&self) -> impl Iterator<Item = &Handler> {
        self.primary.iter().chain(self.secondary.iter())
    }

    fn render_declarations(&self) -> String {
        let cpu = &self.options.cpu_type;
        let mut out = String::from(HEADER);

        out.push('\n');
        out.push_str(&format!("pub type OpcodeHandler = fn(&mut {});\n\n", cpu));

        out.push_str(&format!("pub struct {} {{\n", self.options.tables_type));
        out.push_str("    pub primary: [OpcodeHandler; 256],\n");
        out.push_str("    pub secondary: [OpcodeHandler; 256],\n");
        out.push_str("    pub primary_jumps: [bool; 256],\n");
        out.push_str("    pub secondary_jumps: [bool; 256],\n");
        out.push_str("}\n\n");

        out.push_str(&format!("pub trait {} {{\n", self.options.handlers_trait));
        for handler in self.handlers() {
            out.push_str(&format!("    fn {}(&mut self);\n", handler.name()));
        }
        out.push_str("}\n");

        out
    }

    fn render_definitions(&self) -> String {
        let mut out = String::from(HEADER);

        out.push('\n');
        out.push_str(&format!("impl {} {{\n", self.options.tables_type));
        out.push_str("    pub fn new() -> Self {\n");
        out.push_str("        Self {\n");
        self.render_handler_table(&mut out, "primary", &self.primary);
        self.render_handler_table(&mut out, "secondary", &self.secondary);
        render_jump_table(&mut out, "primary_jumps", &self.primary);
        render_jump_table(&mut out, "secondary_jumps", &self.secondary);
        out.push_str("        }\n");
        out.push_str("    }\n");
        out.push_str("}\n\n");

        out.push_str(&format!(
            "impl {} for {} {{\n",
            self.options.handlers_trait, self.options.cpu_type
        ));
        for (i, handler) in self.handlers().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            render_handler(&mut out, handler);
        }
        out.push_str("}\n");

        out
    }

    fn render_handler_table(&self, out: &mut String, field: &str, handlers: &[Handler]) {
        out.push_str(&format!("            {}: [\n", field));
        for handler in handlers {
            out.push_str(&format!(
                "                {}::{},\n",
                self.options.cpu_type,
                handler.name()
            ));
        }
        out.push_str("            ],\n");
    }
}

fn render_jump_table(out: &mut String, field: &str, handlers: &[Handler]) {
    out.push_str(&format!("            {}: [\n", field));
    for row in handlers.chunks(8) {
        let row = row
            .iter()
            .map(|handler| handler.writes_pc.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("                {},\n", row));
    }
    out.push_str("            ],\n");
}

fn render_handler(out: &mut String, handler: &Handler) {
    out.push_str(&format!("    fn {}(&mut self) {{\n", handler.name()));
    if let Some(length) = handler.length {
        out.push_str(&format!("        // {}, {} byte(s)\n", handler.slot, length));
    }
    for line in &handler.body {
        out.push_str("        ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("    }\n");
}
