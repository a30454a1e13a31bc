//! Colors and global styles for the web app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_card: &'static str,
    pub bg_muted: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_card: "#ffffff",
    bg_muted: "#f1f5f9",
    text_primary: "#1e293b",
    text_secondary: "#475569",
    text_muted: "#94a3b8",
    border: "#e2e8f0",
    accent: "#2B85FF",
    accent_text: "#ffffff",
    error: "#dc2626",
};

/// Get the color palette
#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &PALETTE
}

/// Page-level rules that inline styles cannot express (media queries, hover).
pub const APP_STYLES: &str = r"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
}
.note-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 16px;
    margin-top: 32px;
}
@media (max-width: 1024px) {
    .note-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
@media (max-width: 640px) {
    .note-grid { grid-template-columns: minmax(0, 1fr); }
}
.note-card { transition: box-shadow 0.15s; }
.note-card:hover { box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08); }
.icon-button:hover { color: #2B85FF; }
.add-button:hover { background: #1d6fe0; }
";

pub const TOAST_STYLES: &str = r"
.toast-container {
    position: fixed;
    top: 16px;
    right: 16px;
    z-index: 9999;
    pointer-events: none;
}
.toast-list {
    margin: 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.toast {
    pointer-events: auto;
    min-width: 260px;
    border-radius: 8px;
    border: 1px solid #e2e8f0;
    border-left-width: 4px;
    background: #ffffff;
    box-shadow: 0 10px 30px rgba(15, 23, 42, 0.12);
    padding: 10px 12px;
    display: flex;
    gap: 10px;
    align-items: flex-start;
}
.toast[data-type='success'] { border-left-color: #22c55e; }
.toast[data-type='error'] { border-left-color: #ef4444; }
.toast-content { flex: 1; }
.toast-title { font-size: 13px; font-weight: 600; }
.toast-close {
    border: 0;
    background: transparent;
    color: #94a3b8;
    font-size: 16px;
    line-height: 1;
    padding: 0;
    cursor: pointer;
}
";
