//! HTML template constants for the `HtmlFormatter`.
//!
//! Keeps the stylesheet out of the document-building logic.

/// Document head up to (not including) the `<title>` text.
pub const HTML_HEAD_START: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

/// Stylesheet, closing `</head>` and opening the body container.
pub const HTML_STYLE: &str = r#"    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-chart-primary: #6366f1;
            --color-error: #ef4444;
            --color-error-bg: #fee2e2;
            --color-series-1: #2563eb;
            --color-series-2: #f97316;
            --color-series-3: #16a34a;
            --color-series-4: #dc2626;
            --color-series-5: #9333ea;
            --color-series-6: #0891b2;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; color: var(--color-text); }
        h2 { font-size: 1.5rem; font-weight: 600; margin: 2rem 0 1rem; color: var(--color-text); }
        h3 { font-size: 1.125rem; font-weight: 600; margin-bottom: 1rem; color: var(--color-text); }
        .page-nav { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; flex-wrap: wrap; }
        .page-nav a { padding: 0.5rem 1rem; border: 1px solid var(--color-border); background: var(--color-card); border-radius: 0.375rem; font-size: 0.875rem; color: var(--color-text); text-decoration: none; }
        .page-nav a:hover { background: var(--color-bg); }
        .page { margin-bottom: 3rem; }
        .narrative { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .narrative p { margin-top: 0.5rem; }
        .panel { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; }
        .panel svg { width: 100%; height: auto; max-width: 640px; }
        .panel svg rect { transition: opacity 0.15s ease; }
        .panel svg rect:hover { opacity: 0.85; }
        .panel-error { padding: 1rem; border-radius: 0.375rem; background: var(--color-error-bg); color: #991b1b; border: 1px solid var(--color-error); font-size: 0.875rem; }
        .panel-note { margin-top: 0.5rem; font-size: 0.75rem; color: var(--color-text-muted); font-style: italic; }
        .table-container { overflow-x: auto; max-height: 32rem; overflow-y: auto; }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border: 1px solid var(--color-border); }
        th, td { padding: 0.5rem 0.75rem; text-align: left; border-bottom: 1px solid var(--color-border); vertical-align: top; }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.8125rem; color: var(--color-text-muted); position: sticky; top: 0; }
        td { font-size: 0.8125rem; }
        td.number { text-align: right; font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        tbody tr:hover { background: var(--color-bg); }
        .table-note { margin-top: 0.5rem; font-size: 0.75rem; color: var(--color-text-muted); }
        .no-results { padding: 2rem; text-align: center; color: var(--color-text-muted); }
        .image-panel img { max-width: 100%; height: auto; }
        .image-panel figcaption { font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        /* Print styles: ensure information isn't lost without color */
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .panel, .narrative, table { border: 1px solid #333; }
            .page-nav { display: none; }
            .table-container { max-height: none; overflow: visible; }
            .page { page-break-after: always; }
        }
    </style>
</head>
<body>
    <div class="container">
"#;

/// Document footer.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>sentiment-report</strong>
        </div>
    </div>
</body>
</html>
"#;
