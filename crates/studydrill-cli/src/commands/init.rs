//! The `studydrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("studydrill.toml").exists() {
        println!("studydrill.toml already exists, skipping.");
    } else {
        std::fs::write("studydrill.toml", SAMPLE_CONFIG)?;
        println!("Created studydrill.toml");
    }

    std::fs::create_dir_all("docs")?;
    for (name, content) in [
        ("docs/rust-basics-en.md", SAMPLE_DOC_EN),
        ("docs/rust-basics-es.md", SAMPLE_DOC_ES),
    ] {
        if std::path::Path::new(name).exists() {
            println!("{name} already exists, skipping.");
        } else {
            std::fs::write(name, content)?;
            println!("Created {name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Add your own documents under docs/ as {{topic}}-{{language}}.md");
    println!("  2. Run: studydrill validate --docs docs");
    println!("  3. Run: studydrill run --topics rust-basics --docs docs");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# studydrill configuration

[source]
type = "fs"
dir = "docs"

language = "en"
questions_per_topic = 10
mode = "mixed"
kinds = "both"
output_dir = "./studydrill-results"
"#;

const SAMPLE_DOC_EN: &str = r#"# Rust Basics

## Ownership
**Description:** Every value has a single owning variable; when the owner
goes out of scope the value is dropped.
**Comparison:** Unlike garbage collection, the point of destruction is known
at compile time.
**Example:**
```rust
let s = String::from("hello");
```

## Borrowing
**Description:** Temporary access to a value through a reference, without
taking ownership.
**Comparison:** Unlike ownership transfer, the original binding stays usable
afterwards.

## Lifetimes
**Description:** Named regions of code for which a reference must remain
valid.
**Comparison:** Stricter than runtime reference counting; checked entirely
at compile time.

## Traits
**Description:** Named collections of methods that types implement to share
behavior.
**Comparison:** Similar to interfaces, but with default methods and generic
bounds.
"#;

const SAMPLE_DOC_ES: &str = r#"# Fundamentos de Rust

## Propiedad
**Descripción:** Cada valor tiene una única variable dueña; cuando la dueña
sale de ámbito el valor se destruye.
**Comparación:** A diferencia del recolector de basura, el momento de
destrucción se conoce en compilación.
**Ejemplo:**
```rust
let s = String::from("hola");
```

## Préstamo
**Descripción:** Acceso temporal a un valor mediante una referencia, sin
tomar la propiedad.
**Comparación:** A diferencia de la transferencia de propiedad, la variable
original sigue siendo utilizable.

## Tiempos de vida
**Descripción:** Regiones de código con nombre durante las cuales una
referencia debe seguir siendo válida.
**Comparación:** Más estricto que el conteo de referencias en tiempo de
ejecución.

## Traits
**Descripción:** Conjuntos de métodos con nombre que los tipos implementan
para compartir comportamiento.
**Comparación:** Parecidos a las interfaces, pero con métodos por defecto y
restricciones genéricas.
"#;
