use std::fmt::{self, Write};

use crate::descriptor::{EnumDescriptor, GeneratedSchema, ModelDescriptor};

const INDENT: &str = "    ";

/// Render the GraphQL SDL of a generated schema: custom scalars, then enums, then
/// one object type per model.
pub fn render_sdl(schema: &GeneratedSchema) -> Result<String, fmt::Error> {
    let mut sdl = String::new();

    for scalar in &schema.custom_scalars {
        writeln!(sdl, "scalar {scalar}\n")?;
    }

    for r#enum in schema.enums.values() {
        write_enum(r#enum, &mut sdl)?;
    }

    for model in schema.models.values() {
        write_model(model, &mut sdl)?;
    }

    let len = sdl.trim_end().len();
    sdl.truncate(len);

    if !sdl.is_empty() {
        sdl.push('\n');
    }

    Ok(sdl)
}

fn write_enum(r#enum: &EnumDescriptor, sdl: &mut String) -> fmt::Result {
    if let Some(description) = &r#enum.description {
        write!(sdl, "{}", Description(description, ""))?;
    }

    write!(sdl, "enum {}", r#enum.name)?;

    if r#enum.members.is_empty() {
        sdl.push_str("\n\n");
        return Ok(());
    }

    sdl.push_str(" {\n");

    for member in &r#enum.members {
        if let Some(description) = &member.description {
            write!(sdl, "{}", Description(description, INDENT))?;
        }

        writeln!(sdl, "{INDENT}{}", member.name)?;
    }

    writeln!(sdl, "}}\n")
}

fn write_model(model: &ModelDescriptor, sdl: &mut String) -> fmt::Result {
    if let Some(description) = &model.description {
        write!(sdl, "{}", Description(description, ""))?;
    }

    write!(sdl, "type {}", model.name)?;

    if model.fields.is_empty() {
        sdl.push_str("\n\n");
        return Ok(());
    }

    sdl.push_str(" {\n");

    for field in model.fields.values() {
        if let Some(description) = &field.description {
            write!(sdl, "{}", Description(description, INDENT))?;
        }

        writeln!(sdl, "{INDENT}{}: {}", field.name, field.type_signature)?;
    }

    writeln!(sdl, "}}\n")
}

/// A block string description, on its own lines.
struct Description<'a>(&'a str, &'a str);

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Description(description, indentation) = self;
        let description = description.replace(r#"""""#, r#"\""""#);

        writeln!(f, r#"{indentation}""""#)?;
        writeln!(f, "{indentation}{description}")?;
        writeln!(f, r#"{indentation}""""#)
    }
}

#[cfg(test)]
mod tests {
    use super::Description;

    #[test]
    fn descriptions_escape_block_quotes() {
        let rendered = Description(r#"Contains """ quotes"#, "  ").to_string();

        assert_eq!(rendered, "  \"\"\"\n  Contains \\\"\"\" quotes\n  \"\"\"\n");
    }
}
