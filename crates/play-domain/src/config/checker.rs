//! Acumulador de problemas de validación sobre `serde_json::Value`.
//!
//! Cada helper inspecciona un campo, registra los problemas encontrados y
//! sigue adelante: la validación nunca se corta en el primer error.
use serde_json::{Map, Value};

use crate::error::FieldIssue;

pub(crate) type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
}

/// Límites inclusivos para números.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    min: Option<f64>,
    max: Option<f64>,
}

impl Bounds {
    pub fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min),
               max: Some(max) }
    }

    fn check(&self, n: f64) -> Option<String> {
        if let Some(min) = self.min {
            if n < min {
                return Some(format!("debe ser >= {min}"));
            }
        }
        if let Some(max) = self.max {
            if n > max {
                return Some(format!("debe ser <= {max}"));
            }
        }
        None
    }
}

pub(crate) fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

pub(crate) fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

#[derive(Debug, Default)]
pub(crate) struct Checker {
    issues: Vec<FieldIssue>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(path, message));
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    pub fn object<'v>(&mut self, path: &str, value: &'v Value) -> Option<&'v Object> {
        match value {
            Value::Object(map) => Some(map),
            _ => {
                self.issue(path, "se esperaba un objeto");
                None
            }
        }
    }

    fn field<'v>(&mut self, obj: &'v Object, path: &str, field: &str, presence: Presence) -> Option<&'v Value> {
        match obj.get(field) {
            Some(v) => Some(v),
            None => {
                if presence == Presence::Required {
                    self.issue(join(path, field), "campo requerido");
                }
                None
            }
        }
    }

    /// String arbitrario (puede ser vacío).
    pub fn text<'v>(&mut self, obj: &'v Object, path: &str, field: &str, presence: Presence) -> Option<&'v str> {
        match self.field(obj, path, field, presence)? {
            Value::String(s) => Some(s.as_str()),
            _ => {
                self.issue(join(path, field), "se esperaba un string");
                None
            }
        }
    }

    /// String con al menos un carácter.
    pub fn non_empty<'v>(&mut self, obj: &'v Object, path: &str, field: &str, presence: Presence) -> Option<&'v str> {
        let s = self.text(obj, path, field, presence)?;
        if s.is_empty() {
            self.issue(join(path, field), "no puede estar vacío");
            return None;
        }
        Some(s)
    }

    /// Como `text` pero admite `null` explícito.
    pub fn nullable_text(&mut self, obj: &Object, path: &str, field: &str) {
        match obj.get(field) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => self.issue(join(path, field), "se esperaba un string o null"),
        }
    }

    pub fn boolean(&mut self, obj: &Object, path: &str, field: &str) -> Option<bool> {
        match self.field(obj, path, field, Presence::Optional)? {
            Value::Bool(b) => Some(*b),
            _ => {
                self.issue(join(path, field), "se esperaba un booleano");
                None
            }
        }
    }

    pub fn int(&mut self, obj: &Object, path: &str, field: &str, presence: Presence, bounds: Bounds) -> Option<i64> {
        let value = self.field(obj, path, field, presence)?;
        let Some(n) = value.as_i64() else {
            let msg = if value.is_number() { "se esperaba un entero" } else { "se esperaba un número" };
            self.issue(join(path, field), msg);
            return None;
        };
        if let Some(msg) = bounds.check(n as f64) {
            self.issue(join(path, field), msg);
            return None;
        }
        Some(n)
    }

    pub fn number(&mut self, obj: &Object, path: &str, field: &str, presence: Presence, bounds: Bounds) -> Option<f64> {
        let value = self.field(obj, path, field, presence)?;
        let Some(n) = value.as_f64() else {
            self.issue(join(path, field), "se esperaba un número");
            return None;
        };
        if let Some(msg) = bounds.check(n) {
            self.issue(join(path, field), msg);
            return None;
        }
        Some(n)
    }

    pub fn one_of<'v>(&mut self,
                      obj: &'v Object,
                      path: &str,
                      field: &str,
                      presence: Presence,
                      allowed: &[&str])
                      -> Option<&'v str> {
        let s = self.text(obj, path, field, presence)?;
        if !allowed.contains(&s) {
            self.issue(join(path, field), format!("valor no permitido '{s}', se esperaba uno de: {}", allowed.join(", ")));
            return None;
        }
        Some(s)
    }

    pub fn array<'v>(&mut self,
                     obj: &'v Object,
                     path: &str,
                     field: &str,
                     presence: Presence,
                     min_len: usize)
                     -> Option<&'v Vec<Value>> {
        match self.field(obj, path, field, presence)? {
            Value::Array(items) => {
                if items.len() < min_len {
                    self.issue(join(path, field), format!("se requieren al menos {min_len} elemento(s)"));
                }
                Some(items)
            }
            _ => {
                self.issue(join(path, field), "se esperaba un arreglo");
                None
            }
        }
    }

    /// Arreglo de strings; `allowed` restringe los valores cuando no está vacío.
    pub fn strings(&mut self,
                   obj: &Object,
                   path: &str,
                   field: &str,
                   presence: Presence,
                   min_len: usize,
                   non_empty_items: bool,
                   allowed: &[&str]) {
        let Some(items) = self.array(obj, path, field, presence, min_len) else { return };
        let base = join(path, field);
        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) if non_empty_items && s.is_empty() => {
                    self.issue(index(&base, i), "no puede estar vacío")
                }
                Value::String(s) if !allowed.is_empty() && !allowed.contains(&s.as_str()) => {
                    self.issue(index(&base, i), format!("valor no permitido '{s}'"))
                }
                Value::String(_) => {}
                _ => self.issue(index(&base, i), "se esperaba un string"),
            }
        }
    }

    /// Mapa string -> string.
    pub fn string_map(&mut self, obj: &Object, path: &str, field: &str, presence: Presence) -> Option<usize> {
        let value = self.field(obj, path, field, presence)?;
        let base = join(path, field);
        let map = self.object(&base, value)?;
        for (k, v) in map {
            if !v.is_string() {
                self.issue(join(&base, k), "se esperaba un string");
            }
        }
        Some(map.len())
    }

    /// URL absoluta, o ruta que empieza con `/` cuando `allow_path`.
    pub fn url(&mut self, obj: &Object, path: &str, field: &str, presence: Presence, allow_path: bool) -> Option<()> {
        let s = self.text(obj, path, field, presence)?;
        if allow_path && s.starts_with('/') {
            return Some(());
        }
        if url::Url::parse(s).is_err() {
            let msg = if allow_path { "debe ser una URL absoluta o una ruta /..." } else { "debe ser una URL válida" };
            self.issue(join(path, field), msg);
            return None;
        }
        Some(())
    }

    /// Rechaza claves fuera de `allowed` (esquemas estrictos).
    pub fn no_unknown_keys(&mut self, obj: &Object, path: &str, allowed: &[&str]) {
        for key in obj.keys() {
            if !allowed.contains(&key.as_str()) {
                self.issue(join(path, key), "clave no reconocida");
            }
        }
    }

    /// Recorre un arreglo de objetos aplicando `each` a cada elemento.
    pub fn each_object<F>(&mut self, obj: &Object, path: &str, field: &str, presence: Presence, min_len: usize, mut each: F)
        where F: FnMut(&mut Checker, &Object, &str)
    {
        let Some(items) = self.array(obj, path, field, presence, min_len) else { return };
        let base = join(path, field);
        for (i, item) in items.iter().enumerate() {
            let item_path = index(&base, i);
            if let Some(item_obj) = self.object(&item_path, item) {
                each(self, item_obj, &item_path);
            }
        }
    }

    /// Objeto anidado opcional/requerido.
    pub fn nested<F>(&mut self, obj: &Object, path: &str, field: &str, presence: Presence, check: F)
        where F: FnOnce(&mut Checker, &Object, &str)
    {
        let Some(value) = self.field(obj, path, field, presence) else { return };
        let nested_path = join(path, field);
        if let Some(nested) = self.object(&nested_path, value) {
            check(self, nested, &nested_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Presence::{Optional, Required};
    use super::*;
    use serde_json::json;

    const UNBOUNDED: Bounds = Bounds { min: None, max: None };

    #[test]
    fn collects_every_issue() {
        let v = json!({ "a": "", "n": 200, "list": [] });
        let mut c = Checker::new();
        let obj = c.object("", &v).unwrap();
        c.non_empty(obj, "", "a", Required);
        c.int(obj, "", "n", Required, Bounds::between(0.0, 100.0));
        c.array(obj, "", "list", Required, 1);
        c.text(obj, "", "missing", Required);
        c.text(obj, "", "absent", Optional);
        let issues = c.into_issues();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "n", "list", "missing"]);
    }

    #[test]
    fn int_rejects_fractions_and_strings() {
        let v = json!({ "f": 1.5, "s": "3" });
        let mut c = Checker::new();
        let obj = c.object("", &v).unwrap();
        assert!(c.int(obj, "", "f", Required, UNBOUNDED).is_none());
        assert!(c.int(obj, "", "s", Required, UNBOUNDED).is_none());
        let issues = c.into_issues();
        assert_eq!(issues[0].message, "se esperaba un entero");
        assert_eq!(issues[1].message, "se esperaba un número");
    }

    #[test]
    fn url_accepts_paths_when_allowed() {
        let v = json!({ "a": "/x.svg", "b": "not a url", "c": "https://example.org/a.png" });
        let mut c = Checker::new();
        let obj = c.object("", &v).unwrap();
        assert!(c.url(obj, "", "a", Required, true).is_some());
        assert!(c.url(obj, "", "a", Required, false).is_none());
        assert!(c.url(obj, "", "b", Required, true).is_none());
        assert!(c.url(obj, "", "c", Required, false).is_some());
    }

    #[test]
    fn nested_paths_are_indexed() {
        let v = json!({ "items": [{ "x": 1 }, { "x": "no" }] });
        let mut c = Checker::new();
        let obj = c.object("", &v).unwrap();
        c.each_object(obj, "", "items", Required, 1, |c, item, p| {
             c.int(item, p, "x", Required, UNBOUNDED);
         });
        let issues = c.into_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "items[1].x");
    }
}
