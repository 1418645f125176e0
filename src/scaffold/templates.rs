//! Embedded file contents for the generated application.
//!
//! Every emitted file is a literal template stored under `resources/app/`
//! and embedded at compile time. There is no templating engine: `{{name}}`
//! is the single substitution marker, and only `index.html` carries it.
//! `package.json` is the one file assembled in code, so the project name
//! lands in its `name` field the same way the title lands in the HTML.

use serde_json::json;

/// Substitution marker for the project name.
pub const NAME_MARKER: &str = "{{name}}";

mod app_templates {
    pub const TSCONFIG: &str = include_str!("../../resources/app/tsconfig.json");
    pub const TSCONFIG_NODE: &str = include_str!("../../resources/app/tsconfig.node.json");
    pub const VITE_CONFIG: &str = include_str!("../../resources/app/vite.config.ts");
    pub const INDEX_HTML: &str = include_str!("../../resources/app/index.html");
    pub const MAIN_TSX: &str = include_str!("../../resources/app/main.tsx");
    pub const INDEX_CSS: &str = include_str!("../../resources/app/index.css");
    pub const APP_TSX: &str = include_str!("../../resources/app/App.tsx");
    pub const STORE_TS: &str = include_str!("../../resources/app/store.ts");
    pub const HOOKS_TS: &str = include_str!("../../resources/app/hooks.ts");
    pub const STORAGE_TS: &str = include_str!("../../resources/app/storage.ts");
    pub const USER_SLICE_TS: &str = include_str!("../../resources/app/userSlice.ts");
    pub const BASE_API_TS: &str = include_str!("../../resources/app/baseApi.ts");
    pub const EXAMPLE_API_TS: &str = include_str!("../../resources/app/exampleApi.ts");
}

const ENV_FILE: &str = "VITE_API_URL=\n";

/// One entry of the scaffold manifest: a path relative to the project
/// root plus the full content written in a single pass.
pub struct ProjectFile {
    pub path: &'static str,
    pub contents: String,
}

/// The fixed, ordered set of files every generated project contains.
///
/// Order matters only for the progress output; no file depends on an
/// earlier one at write time.
pub fn manifest(name: &str) -> Vec<ProjectFile> {
    vec![
        file("package.json", package_json(name)),
        file("tsconfig.json", app_templates::TSCONFIG.to_string()),
        file("tsconfig.node.json", app_templates::TSCONFIG_NODE.to_string()),
        file("vite.config.ts", app_templates::VITE_CONFIG.to_string()),
        file("index.html", render(app_templates::INDEX_HTML, name)),
        file("src/main.tsx", app_templates::MAIN_TSX.to_string()),
        file("src/index.css", app_templates::INDEX_CSS.to_string()),
        file("src/App.tsx", app_templates::APP_TSX.to_string()),
        file("src/app/store.ts", app_templates::STORE_TS.to_string()),
        file("src/app/hooks.ts", app_templates::HOOKS_TS.to_string()),
        file("src/utils/storage.ts", app_templates::STORAGE_TS.to_string()),
        file(
            "src/features/user/userSlice.ts",
            app_templates::USER_SLICE_TS.to_string(),
        ),
        file("src/api/baseApi.ts", app_templates::BASE_API_TS.to_string()),
        file(
            "src/api/exampleApi.ts",
            app_templates::EXAMPLE_API_TS.to_string(),
        ),
        file(".env", ENV_FILE.to_string()),
        file(".env.example", ENV_FILE.to_string()),
    ]
}

fn file(path: &'static str, contents: String) -> ProjectFile {
    ProjectFile { path, contents }
}

fn render(template: &str, name: &str) -> String {
    template.replace(NAME_MARKER, name)
}

/// Build `package.json` for the new app: dev/build/preview scripts plus
/// the pinned React + Redux Toolkit dependency set.
fn package_json(name: &str) -> String {
    let manifest = json!({
        "name": name,
        "private": true,
        "version": "0.0.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "tsc -b && vite build",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18.3.1",
            "react-dom": "^18.3.1",
            "@reduxjs/toolkit": "^2.2.7",
            "react-redux": "^9.1.2"
        },
        "devDependencies": {
            "vite": "^5.4.8",
            "@vitejs/plugin-react": "^4.3.2",
            "typescript": "^5.6.3",
            "@types/react": "^18.3.10",
            "@types/react-dom": "^18.3.0"
        }
    });

    serde_json::to_string_pretty(&manifest).expect("static package.json value serializes")
}
