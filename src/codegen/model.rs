//! Canonical model generator
//!
//! Derives the canonical record types from one version's schema and emits the
//! `Convert` impls between them and every target version's wire types. Fields
//! the target lacks are skipped; a field that exists on both sides with a
//! different shape is rejected here, so the generated impls are always total.

use crate::codegen::schema::{is_copy_type, ApiSchema, FieldDef, FieldKind, TypeDef};
use crate::codegen::util::{fn_signature, impl_header, to_lower_snake_case, GENERATED_HEADER};
use crate::version::ApiVersion;
use crate::{Error, Result};

pub struct ModelGenerator<'a> {
    source: &'a ApiSchema,
    targets: Vec<&'a ApiSchema>,
    production: ApiVersion,
}

impl<'a> ModelGenerator<'a> {
    /// Generator whose only target is the source schema itself.
    pub fn new(source: &'a ApiSchema) -> Self {
        Self {
            source,
            targets: vec![source],
            production: source.version,
        }
    }

    /// Also emit conversions for `target`. Targets are kept in version order.
    pub fn with_target(mut self, target: &'a ApiSchema) -> Self {
        if !self.targets.iter().any(|t| t.version == target.version) {
            self.targets.push(target);
            self.targets.sort_by_key(|t| t.version);
        }
        self
    }

    /// Version the `to_production` / `from_production` helpers point at.
    pub fn production(mut self, version: ApiVersion) -> Self {
        self.production = version;
        self
    }

    /// Check every target against the source before rendering anything.
    pub fn validate(&self) -> Result<()> {
        if !self.targets.iter().any(|t| t.version == self.production) {
            return Err(Error::Schema(format!(
                "production version {} is not a generation target",
                self.production
            )));
        }
        for def in &self.source.types {
            for target in &self.targets {
                if let Some(target_def) = target.get(&def.name) {
                    shared_fields(def, target_def)?;
                }
            }
        }
        Ok(())
    }

    /// Full module: header, imports and every source type in declaration order.
    pub fn render_module(&self) -> Result<String> {
        self.validate()?;

        let modules: Vec<&str> = self
            .targets
            .iter()
            .map(|t| t.version.wire_module())
            .collect();
        let compute_import = if modules.len() == 1 {
            modules[0].to_string()
        } else {
            format!("{{{}}}", modules.join(", "))
        };

        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
        out.push_str(&format!("use crate::compute::{};\n", compute_import));
        out.push_str("use crate::convert::{convert_optional, convert_sequence, convert_to, Convert};\n");

        for def in &self.source.types {
            out.push('\n');
            out.push_str(&self.render_def(def)?);
        }
        Ok(out)
    }

    /// One canonical type with its conversions and production helpers.
    pub fn render_type(&self, name: &str) -> Result<String> {
        let def = self.source.get(name).ok_or_else(|| {
            Error::Schema(format!("type {} not found in {} schema", name, self.source.version))
        })?;
        self.render_def(def)
    }

    fn render_def(&self, def: &TypeDef) -> Result<String> {
        let mut items = vec![render_struct(def)];

        for target in &self.targets {
            let Some(target_def) = target.get(&def.name) else {
                tracing::debug!("{} has no {}, skipping conversions", target.version, def.name);
                continue;
            };
            let fields = shared_fields(def, target_def)?;
            let module = target.version.wire_module();
            items.push(render_convert(
                &def.name,
                &format!("{}::{}", module, def.name),
                &fields,
            ));
            items.push(render_convert(
                &format!("{}::{}", module, def.name),
                &def.name,
                &fields,
            ));
        }

        let production_has_type = self
            .targets
            .iter()
            .any(|t| t.version == self.production && t.get(&def.name).is_some());
        if production_has_type {
            items.extend(render_production_helpers(
                &def.name,
                self.production.wire_module(),
            ));
        }

        Ok(items.join("\n"))
    }
}

/// Fields of `source` that `target` declares with the same shape.
fn shared_fields<'s>(source: &'s TypeDef, target: &TypeDef) -> Result<Vec<&'s FieldDef>> {
    let mut fields = Vec::with_capacity(source.fields.len());
    for field in &source.fields {
        let Some(other) = target.field(&field.name) else {
            continue;
        };
        if !field.compatible_with(other) {
            return Err(Error::ConversionMismatch {
                type_name: source.name.clone(),
                field: field.name.clone(),
                reason: format!(
                    "{:?} {} does not match {:?} {}",
                    field.kind, field.ty, other.kind, other.ty
                ),
            });
        }
        fields.push(field);
    }
    Ok(fields)
}

fn render_struct(def: &TypeDef) -> String {
    let mut out = String::new();
    out.push_str("#[derive(Debug, Clone, Default, PartialEq)]\n");
    out.push_str(&format!("pub struct {} {{\n", def.name));
    for field in &def.fields {
        out.push_str(&format!("    pub {}: {},\n", field.name, field.extract_type()));
    }
    out.push_str("}\n");
    out
}

fn render_assignment(field: &FieldDef) -> String {
    let name = &field.name;
    match field.kind {
        FieldKind::Scalar if is_copy_type(&field.ty) => format!("dst.{name} = self.{name};"),
        FieldKind::Scalar => format!("dst.{name} = self.{name}.clone();"),
        FieldKind::Optional => format!("dst.{name} = convert_optional(&self.{name});"),
        FieldKind::Sequence => format!("dst.{name} = convert_sequence(&self.{name});"),
    }
}

fn render_convert(from: &str, to: &str, fields: &[&FieldDef]) -> String {
    let mut out = impl_header(&format!("Convert<{}>", to), from);
    if fields.is_empty() {
        let params = ["&self".to_string(), format!("_dst: &mut {}", to)];
        out.push_str(&fn_signature(4, "fn convert_into", &params, " {}"));
    } else {
        let params = ["&self".to_string(), format!("dst: &mut {}", to)];
        out.push_str(&fn_signature(4, "fn convert_into", &params, " {"));
        for field in fields {
            out.push_str(&format!("        {}\n", render_assignment(field)));
        }
        out.push_str("    }\n");
    }
    out.push_str("}\n");
    out
}

fn render_production_helpers(name: &str, module: &str) -> Vec<String> {
    let snake = to_lower_snake_case(name);
    let wire = format!("{module}::{name}");

    let mut methods = format!("impl {name} {{\n");
    methods.push_str(&fn_signature(
        4,
        "pub fn to_production",
        &["&self".to_string()],
        &format!(" -> {wire} {{"),
    ));
    methods.push_str("        convert_to(self)\n    }\n\n");
    methods.push_str(&fn_signature(
        4,
        "pub fn from_production",
        &[format!("src: &{wire}")],
        " -> Self {",
    ));
    methods.push_str("        convert_to(src)\n    }\n}\n");

    let mut to_production = fn_signature(
        0,
        &format!("pub fn {snake}_array_to_production"),
        &[format!("items: &[{name}]")],
        &format!(" -> Vec<{wire}> {{"),
    );
    to_production.push_str("    convert_sequence(items)\n}\n");

    let mut from_production = fn_signature(
        0,
        &format!("pub fn {snake}_array_from_production"),
        &[format!("items: &[{wire}]")],
        &format!(" -> Vec<{name}> {{"),
    );
    from_production.push_str("    convert_sequence(items)\n}\n");

    vec![methods, to_production, from_production]
}
