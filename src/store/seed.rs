//! Records present before any client request.

use super::types::Snippet;

/// The two demo snippets loaded at startup, ids 1 and 2.
pub fn seed_snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            id: 1,
            title: "Hello World (Go)".to_string(),
            code: "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"Hello, World!\")\n}"
                .to_string(),
            description: "A simple Go program.".to_string(),
        },
        Snippet {
            id: 2,
            title: "React Component Example".to_string(),
            code: "function MyComponent() {\n  return <div>Hello from React!</div>;\n}".to_string(),
            description: "A basic React functional component.".to_string(),
        },
    ]
}
