use crate::{models::Appearance, utils::html::escape};

const ICON_HREF: &str = "/assets/images/Tutwurihandayani.png";
const THEME_COLOR: &str = "#3B82F6";
const FONT_HOST: &str = "https://fonts.bunny.net";
const FONT_STYLESHEET: &str =
    "https://fonts.bunny.net/css?family=plus-jakarta-sans:400,500,600,700";

/// Everything the bootstrap document varies on.
#[derive(Debug, Clone)]
pub struct ShellDocument<'a> {
    pub lang: &'a str,
    pub appearance: Appearance,
    pub title: &'a str,
    pub entry: &'a str,
    pub page_json: &'a str,
}

impl ShellDocument<'_> {
    pub fn render(&self) -> String {
        let html_class = if self.appearance.renders_dark() {
            r#" class="dark""#
        } else {
            ""
        };
        let lang = escape(self.lang);
        let title = escape(self.title);
        let entry = escape(self.entry);
        let page = escape(self.page_json);
        let prepaint = prepaint_script(self.appearance);

        format!(
            r##"<!DOCTYPE html>
<html lang="{lang}"{html_class}>
    <head>
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <script>{prepaint}</script>
        <style>
            html {{ background-color: oklch(1 0 0); }}
            html.dark {{ background-color: oklch(0.145 0 0); }}
        </style>
        <title>{title}</title>
        <link rel="icon" type="image/png" sizes="32x32" href="{ICON_HREF}">
        <link rel="icon" type="image/png" sizes="16x16" href="{ICON_HREF}">
        <link rel="shortcut icon" type="image/png" href="{ICON_HREF}">
        <link rel="apple-touch-icon" sizes="180x180" href="{ICON_HREF}">
        <meta name="theme-color" content="{THEME_COLOR}">
        <meta name="msapplication-TileColor" content="{THEME_COLOR}">
        <meta name="msapplication-TileImage" content="{ICON_HREF}">
        <link rel="preconnect" href="{FONT_HOST}">
        <link href="{FONT_STYLESHEET}" rel="stylesheet">
        <script type="module" src="{entry}"></script>
    </head>
    <body class="font-sans antialiased">
        <div id="app" data-page="{page}"></div>
    </body>
</html>
"##
        )
    }
}

/// Adds the dark class before first paint when the setting follows the OS.
fn prepaint_script(appearance: Appearance) -> String {
    format!(
        "(function(){{var appearance='{}';if(appearance==='system'&&window.matchMedia&&window.matchMedia('(prefers-color-scheme: dark)').matches){{document.documentElement.classList.add('dark');}}}})();",
        appearance.as_str()
    )
}
