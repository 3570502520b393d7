use crate::core::model::{Link, Representation};
use crate::interpreter::{CURIES, EMBEDDED, LINKS};
use crate::render::Renderer;
use crate::Result;
use serde_json::{Map, Value};

/// Serializes a representation back to HAL+JSON with every resolvable
/// target written in absolute form.
///
/// A relation with a single link is written as an object, otherwise as an
/// array.
#[derive(Debug, Default, Clone, Copy)]
pub struct HalRenderer {
    pub pretty: bool,
}

impl Renderer for HalRenderer {
    fn render(&self, repr: &Representation) -> Result<String> {
        let value = to_hal_value(repr)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }
}

pub fn to_hal_value(repr: &Representation) -> Result<Value> {
    let mut links: Map<String, Value> = Map::new();
    let mut embedded: Map<String, Value> = Map::new();
    let mut link_groups: Vec<(&str, Vec<Value>)> = Vec::new();
    let mut embedded_groups: Vec<(&str, Vec<Value>)> = Vec::new();

    for link in repr.all_links() {
        let (groups, value) = match link.embedded() {
            Some(nested) => (&mut embedded_groups, to_hal_value(nested)?),
            None => (&mut link_groups, link_object(link)?),
        };
        match groups.iter_mut().find(|(rel, _)| *rel == link.literal_rel()) {
            Some((_, values)) => values.push(value),
            None => groups.push((link.literal_rel(), vec![value])),
        }
    }

    if !repr.curies().is_empty() {
        let mut curies = Vec::with_capacity(repr.curies().len());
        for definition in repr.curies() {
            let mut object = serde_json::to_value(definition)?;
            if let Some(members) = object.as_object_mut() {
                members.insert("templated".to_string(), Value::Bool(true));
            }
            curies.push(object);
        }
        links.insert(CURIES.to_string(), Value::Array(curies));
    }
    for (rel, values) in link_groups {
        links.insert(rel.to_string(), collapse(values));
    }
    for (rel, values) in embedded_groups {
        embedded.insert(rel.to_string(), collapse(values));
    }

    let mut document = Map::new();
    if !links.is_empty() {
        document.insert(LINKS.to_string(), Value::Object(links));
    }
    for (key, value) in repr.properties() {
        document.insert(key.clone(), value.clone());
    }
    if !embedded.is_empty() {
        document.insert(EMBEDDED.to_string(), Value::Object(embedded));
    }
    Ok(Value::Object(document))
}

fn link_object(link: &Link) -> Result<Value> {
    let mut object = Map::new();
    if let Some(target) = link.target() {
        object.insert("href".to_string(), Value::String(target.as_str().to_string()));
    }
    if link.is_templated() {
        object.insert("templated".to_string(), Value::Bool(true));
    }
    if let Value::Object(attributes) = serde_json::to_value(link.attributes())? {
        object.extend(attributes);
    }
    Ok(Value::Object(object))
}

fn collapse(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}
