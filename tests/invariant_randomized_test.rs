use hal_interp::{HalClient, InterpretOptions, Target};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

const RELS: &[&str] = &["item", "next", "ex:thing", "http://rels.example/abs", "search"];

fn gen_link_object(rng: &mut Lcg) -> Value {
    match rng.next_below(5) {
        0 => json!({"href": format!("/items/{}", rng.next_below(100))}),
        1 => json!({"href": format!("http://example.com/abs/{}", rng.next_below(100))}),
        2 => json!({"href": "/search{?q}", "templated": true}),
        3 => json!({"title": "broken"}),
        _ => json!({"href": format!("rel/{}", rng.next_below(100)), "name": "n"}),
    }
}

fn gen_relation(rng: &mut Lcg, gen: fn(&mut Lcg, usize) -> Value, depth: usize) -> Value {
    if rng.next_bool() {
        gen(rng, depth)
    } else {
        let count = rng.next_below(4);
        Value::Array((0..count).map(|_| gen(rng, depth)).collect())
    }
}

fn gen_document(rng: &mut Lcg, depth: usize) -> Value {
    let mut doc = Map::new();
    for i in 0..rng.next_below(4) {
        doc.insert(format!("prop{}", i), json!(rng.next_below(1000)));
    }

    if rng.next_bool() {
        let mut links = Map::new();
        if rng.next_bool() {
            links.insert("self".into(), json!({"href": format!("/docs/{}", rng.next_below(50))}));
        }
        if rng.next_bool() {
            links.insert(
                "curies".into(),
                json!([{"name": "ex", "href": "http://example.com/rels/{rel}", "templated": true}]),
            );
        }
        for _ in 0..rng.next_below(4) {
            let rel = RELS[rng.next_below(RELS.len())];
            links.insert(rel.into(), gen_relation(rng, |rng, _| gen_link_object(rng), depth));
        }
        doc.insert("_links".into(), Value::Object(links));
    }

    if depth < 3 && rng.next_bool() {
        let mut embedded = Map::new();
        for _ in 0..rng.next_below(3) {
            let rel = RELS[rng.next_below(RELS.len())];
            embedded.insert(rel.into(), gen_relation(rng, gen_document, depth + 1));
        }
        doc.insert("_embedded".into(), Value::Object(embedded));
    }

    Value::Object(doc)
}

fn count_items(section: Option<&Value>, skip: &str) -> usize {
    section
        .and_then(Value::as_object)
        .map(|members| {
            members
                .iter()
                .filter(|(key, _)| key.as_str() != skip)
                .map(|(_, value)| match value {
                    Value::Array(items) => items.len(),
                    Value::Null => 0,
                    _ => 1,
                })
                .sum()
        })
        .unwrap_or(0)
}

#[test]
fn randomized_interpretation_invariants() {
    let client = HalClient::default();
    let mut rng = Lcg::new(0x4a4c_2024);

    for _ in 0..300 {
        let document = gen_document(&mut rng, 0);
        let options = if rng.next_bool() {
            InterpretOptions::default()
                .with_context_url("http://example.com/base/")
                .unwrap()
        } else {
            InterpretOptions::default()
        };
        let interpreter = client.interpreter(&document, options.clone());

        let props = interpreter.extract_props();
        assert!(!props.contains_key("_links"));
        assert!(!props.contains_key("_embedded"));
        let members = document.as_object().unwrap();
        for (key, value) in members {
            if key != "_links" && key != "_embedded" {
                assert_eq!(props.get(key), Some(value));
            }
        }

        let repr = interpreter.extract_repr().expect("interpret should work");
        assert_eq!(repr, interpreter.extract_repr().unwrap());
        assert_eq!(repr, client.interpret(&document, options).unwrap());

        let link_count = count_items(document.get("_links"), "curies");
        let embedded_count = count_items(document.get("_embedded"), "");
        assert_eq!(repr.all_links().len(), link_count + embedded_count);

        let first_embedded = repr
            .all_links()
            .iter()
            .position(|link| link.is_embedded())
            .unwrap_or(repr.all_links().len());
        assert!(repr.all_links()[first_embedded..].iter().all(|l| l.is_embedded()));

        for link in repr.all_links() {
            assert!(!link.literal_rel().is_empty());
            if link.literal_rel() == "ex:thing" && repr.curies().len() == 1 {
                assert_eq!(link.fully_qualified_rel(), "http://example.com/rels/thing");
            }
            if link.is_templated() {
                assert!(matches!(link.target(), Some(Target::Template(_))));
            }
            if repr.href().is_some() && !link.is_embedded() && !link.is_templated() {
                if let Some(target) = link.target() {
                    assert!(target.is_absolute(), "unresolved {target}");
                }
            }
        }

        if let Some(embedded) = document.get("_embedded").and_then(Value::as_object) {
            for rel in embedded.keys() {
                let expected = match &embedded[rel] {
                    Value::Array(items) => items.len(),
                    Value::Null => 0,
                    _ => 1,
                };
                assert_eq!(repr.related(rel).len(), expected);
            }
        }
    }
}
