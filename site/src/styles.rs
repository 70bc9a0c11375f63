//! CSS for the landing page.
//!
//! One stylesheet serves both delivery modes: the browser app injects it
//! into a `<style>` element, the static render inlines it into `<head>`.
//!
//! # Reveal animations
//!
//! [`crate::components::Reveal`] writes three custom properties on each
//! wrapper (`--reveal-from`, `--reveal-duration`, `--reveal-delay`); the
//! `.reveal` rules below turn them into the entrance transition. A `static`
//! class on `<body>` pins every reveal in its final state.
//!
//! # Customization
//!
//! ```rust
//! use antimatter_site::styles::PAGE_CSS;
//!
//! let extra = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, extra);
//! assert!(combined.contains("--accent-violet"));
//! ```

/// Complete CSS for the page - dark theme with violet, cyan and emerald accents.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-deep: #05050a;
    --bg-surface: #0c0c16;
    --bg-raised: #14142a;
    --border-soft: rgba(255, 255, 255, 0.08);
    --border-strong: rgba(255, 255, 255, 0.16);
    --text-bright: #f4f4f8;
    --text-body: #b4b4c8;
    --text-dim: #6e6e88;
    --accent-violet: #8b5cf6;
    --accent-cyan: #22d3ee;
    --accent-emerald: #10b981;
    --accent-gradient: linear-gradient(135deg, #8b5cf6 0%, #22d3ee 100%);
    --radius-card: 20px;
    --radius-pill: 999px;
    --header-height: 72px;
    --font-sans: Inter, system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
    --font-mono: JetBrains Mono, ui-monospace, SFMono-Regular, Menlo, monospace;
    --ease-out: cubic-bezier(0.22, 1, 0.36, 1);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; scroll-padding-top: var(--header-height); }

body {
    margin: 0;
    background: var(--bg-deep);
    color: var(--text-body);
    font-family: var(--font-sans);
    font-size: 16px;
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }
h1, h2, h3, h4, p { margin: 0; }
ul { margin: 0; padding: 0; list-style: none; }
button { font: inherit; color: inherit; background: none; border: 0; cursor: pointer; }

.noise {
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 100;
    opacity: 0.035;
    background-image: radial-gradient(rgba(255, 255, 255, 0.6) 1px, transparent 1px);
    background-size: 3px 3px;
}

.container { width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.container-narrow { max-width: 960px; }

.gradient-text {
    background: var(--accent-gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* Icons */
.icon { width: 24px; height: 24px; flex-shrink: 0; }
.icon-xs { width: 14px; height: 14px; }
.icon-sm { width: 18px; height: 18px; }
.icon-md { width: 22px; height: 22px; }
.icon-check { width: 16px; height: 16px; color: var(--text-dim); }
.icon-check.accent { color: var(--accent-emerald); }
.icon-quote { width: 36px; height: 36px; color: var(--accent-violet); opacity: 0.4; }
.logo-mark { width: 32px; height: 32px; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 10px 20px;
    border-radius: var(--radius-pill);
    font-weight: 600;
    font-size: 15px;
    transition: transform 0.2s var(--ease-out), box-shadow 0.2s ease, background 0.2s ease;
}
.btn:hover { transform: translateY(-2px); }
.btn-sm { padding: 8px 16px; font-size: 14px; }
.btn-lg { padding: 14px 28px; font-size: 16px; }
.btn-block { width: 100%; }
.btn-primary { background: var(--accent-gradient); color: #fff; box-shadow: 0 8px 30px rgba(139, 92, 246, 0.35); }
.btn-primary:hover { box-shadow: 0 12px 40px rgba(139, 92, 246, 0.5); }
.btn-ghost { border: 1px solid var(--border-strong); color: var(--text-bright); }
.btn-ghost:hover { background: rgba(255, 255, 255, 0.06); }
.btn-light { background: #fff; color: var(--bg-deep); }
.btn-pulse { animation: btn-pulse 2.4s ease-in-out infinite; }

@keyframes btn-pulse {
    0%, 100% { box-shadow: 0 8px 30px rgba(139, 92, 246, 0.35); }
    50% { box-shadow: 0 8px 44px rgba(34, 211, 238, 0.45); }
}

/* Reveal on scroll */
.reveal {
    opacity: 0;
    transform: var(--reveal-from, translateY(30px));
    transition:
        opacity var(--reveal-duration, 700ms) var(--ease-out) var(--reveal-delay, 0ms),
        transform var(--reveal-duration, 700ms) var(--ease-out) var(--reveal-delay, 0ms);
    will-change: opacity, transform;
}
.reveal.is-visible { opacity: 1; transform: none; }
.static .reveal { opacity: 1; transform: none; transition: none; }

@media (prefers-reduced-motion: reduce) {
    .reveal { opacity: 1; transform: none; transition: none; }
    .btn-pulse, .pulse-dot, .scroll-hint { animation: none; }
}

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    height: var(--header-height);
    transition: background 0.3s ease, border-color 0.3s ease, backdrop-filter 0.3s ease;
    border-bottom: 1px solid transparent;
}
.site-header.scrolled {
    background: rgba(5, 5, 10, 0.8);
    backdrop-filter: blur(16px);
    border-bottom-color: var(--border-soft);
}
.nav-inner {
    max-width: 1200px;
    height: 100%;
    margin: 0 auto;
    padding: 0 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 24px;
}
.brand { display: inline-flex; align-items: center; gap: 10px; }
.brand-name { font-weight: 700; font-size: 18px; color: var(--text-bright); }
.brand-accent { color: var(--accent-violet); }
.nav-links { display: none; gap: 32px; }
.nav-link { font-size: 14px; color: var(--text-body); transition: color 0.2s ease; }
.nav-link:hover { color: var(--text-bright); }
.nav-actions { display: none; align-items: center; gap: 16px; }
.nav-signin { font-size: 14px; }
.menu-toggle { display: flex; flex-direction: column; gap: 5px; padding: 8px; }
.menu-bar { display: block; width: 22px; height: 2px; background: var(--text-bright); transition: transform 0.25s ease, opacity 0.25s ease; }
.menu-toggle.open .menu-bar:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.menu-toggle.open .menu-bar:nth-child(2) { opacity: 0; }
.menu-toggle.open .menu-bar:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
.mobile-menu {
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    padding: 16px 24px 24px;
    background: rgba(5, 5, 10, 0.96);
    border-bottom: 1px solid var(--border-soft);
    display: flex;
    flex-direction: column;
    gap: 4px;
}
.mobile-link { padding: 12px 0; border-bottom: 1px solid var(--border-soft); color: var(--text-bright); }
.mobile-actions { display: flex; flex-direction: column; gap: 12px; margin-top: 16px; }

@media (min-width: 900px) {
    .nav-links, .nav-actions { display: flex; }
    .menu-toggle, .mobile-menu { display: none; }
}

/* Sections */
.section { position: relative; padding: 120px 0; }
.section-rule {
    position: absolute;
    top: 0;
    left: 50%;
    width: min(80%, 960px);
    height: 1px;
    transform: translateX(-50%);
    background: linear-gradient(90deg, transparent, var(--border-strong), transparent);
}
.section-header { max-width: 720px; margin: 0 auto 64px; text-align: center; }
.section-header-left { margin-left: 0; text-align: left; }
.eyebrow {
    display: inline-block;
    margin-bottom: 16px;
    font-family: var(--font-mono);
    font-size: 13px;
    letter-spacing: 0.12em;
    text-transform: uppercase;
}
.eyebrow-violet { color: var(--accent-violet); }
.eyebrow-cyan { color: var(--accent-cyan); }
.eyebrow-emerald { color: var(--accent-emerald); }
.section-title {
    font-size: clamp(32px, 5vw, 52px);
    line-height: 1.1;
    font-weight: 700;
    letter-spacing: -0.02em;
    color: var(--text-bright);
}
.section-description { margin-top: 20px; font-size: 18px; }

.card {
    position: relative;
    overflow: hidden;
    padding: 32px;
    border-radius: var(--radius-card);
    background: var(--bg-surface);
    border: 1px solid var(--border-soft);
    transition: border-color 0.3s ease, transform 0.3s var(--ease-out);
}
.card:hover { border-color: var(--border-strong); transform: translateY(-4px); }
.card-title { margin: 20px 0 10px; font-size: 20px; font-weight: 600; color: var(--text-bright); }
.card-text { font-size: 15px; color: var(--text-body); }
.card-halo {
    position: absolute;
    inset: -40%;
    opacity: 0;
    transition: opacity 0.4s ease;
    pointer-events: none;
}
.card:hover .card-halo { opacity: 1; }
.divider { height: 1px; margin: 80px 0; background: var(--border-soft); }

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    padding: calc(var(--header-height) + 80px) 0 120px;
    overflow: hidden;
}
.hero-backdrop {
    position: absolute;
    inset: 0;
    background:
        radial-gradient(ellipse at 30% 20%, rgba(139, 92, 246, 0.25), transparent 60%),
        radial-gradient(ellipse at 70% 60%, rgba(34, 211, 238, 0.15), transparent 60%);
}
.particle-canvas { position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; }
.hero-grid-overlay {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(var(--border-soft) 1px, transparent 1px),
        linear-gradient(90deg, var(--border-soft) 1px, transparent 1px);
    background-size: 64px 64px;
    mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
}
.hero-content { position: relative; z-index: 1; text-align: center; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    padding: 6px 16px;
    border-radius: var(--radius-pill);
    border: 1px solid rgba(139, 92, 246, 0.35);
    background: rgba(139, 92, 246, 0.1);
    font-size: 13px;
    color: var(--text-bright);
}
.pulse-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--accent-emerald);
    animation: pulse-dot 2s ease-in-out infinite;
}
@keyframes pulse-dot {
    0%, 100% { box-shadow: 0 0 0 0 rgba(16, 185, 129, 0.6); }
    50% { box-shadow: 0 0 0 6px rgba(16, 185, 129, 0); }
}
.hero-title {
    margin: 28px auto 24px;
    max-width: 900px;
    font-size: clamp(44px, 8vw, 88px);
    line-height: 1.02;
    font-weight: 800;
    letter-spacing: -0.035em;
    color: var(--text-bright);
}
.hero-description { max-width: 620px; margin: 0 auto; font-size: 19px; }
.hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-top: 40px; }
.social-proof { display: inline-flex; align-items: center; gap: 12px; margin-top: 40px; font-size: 14px; }
.avatar-stack { display: inline-flex; }
.avatar-dot {
    width: 28px;
    height: 28px;
    margin-left: -8px;
    border-radius: 50%;
    border: 2px solid var(--bg-deep);
    background: var(--accent-gradient);
}
.avatar-dot:first-child { margin-left: 0; }
.social-proof-text { color: var(--text-dim); }
.hero-mockup { position: relative; max-width: 1000px; margin: 80px auto 0; }
.mockup-card {
    border-radius: var(--radius-card);
    border: 1px solid var(--border-strong);
    background: rgba(12, 12, 22, 0.85);
    backdrop-filter: blur(12px);
    box-shadow: 0 40px 120px rgba(139, 92, 246, 0.25);
    overflow: hidden;
    text-align: left;
}
.terminal-header {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 14px 18px;
    border-bottom: 1px solid var(--border-soft);
}
.terminal-dot { width: 12px; height: 12px; border-radius: 50%; }
.terminal-dot.red { background: #ff5f57; }
.terminal-dot.yellow { background: #febc2e; }
.terminal-dot.green { background: #28c840; }
.terminal-title { margin-left: 12px; font-family: var(--font-mono); font-size: 12px; color: var(--text-dim); }
.mockup-body { display: grid; gap: 16px; padding: 24px; }
.stat-tile { padding: 16px; border-radius: 12px; background: var(--bg-raised); border: 1px solid var(--border-soft); }
.stat-tile-label { font-size: 12px; color: var(--text-dim); }
.stat-tile-value { margin-top: 6px; font-size: 24px; font-weight: 700; color: var(--text-bright); }
.stat-tile-change { font-size: 12px; color: var(--accent-emerald); }
.mockup-code {
    margin: 0;
    padding: 20px;
    border-radius: 12px;
    background: #07070e;
    font-family: var(--font-mono);
    font-size: 13px;
    line-height: 1.7;
    white-space: pre-wrap;
    color: var(--text-body);
}
.code-keyword { color: #c792ea; }
.code-decl { color: var(--accent-cyan); }
.code-call { color: #82aaff; }
.code-string { color: #c3e88d; }
.code-comment { color: var(--text-dim); }
.glow { position: absolute; width: 420px; height: 420px; border-radius: 50%; filter: blur(120px); opacity: 0.35; pointer-events: none; }
.glow-violet { background: var(--accent-violet); top: -80px; left: -120px; }
.glow-cyan { background: var(--accent-cyan); bottom: -80px; right: -120px; }
.scroll-hint {
    position: absolute;
    left: 50%;
    bottom: 32px;
    transform: translateX(-50%);
    color: var(--text-dim);
    animation: scroll-hint 2s ease-in-out infinite;
}
@keyframes scroll-hint {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, 8px); }
}

@media (min-width: 760px) {
    .mockup-body { grid-template-columns: repeat(3, 1fr); }
    .mockup-code { grid-column: 1 / -1; }
}

/* Features */
.features-grid { display: grid; gap: 24px; }
.feature-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 52px;
    height: 52px;
    border-radius: 14px;
    color: #fff;
}
@media (min-width: 700px) { .features-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .features-grid { grid-template-columns: repeat(3, 1fr); } }

/* Product */
.section-product { overflow: hidden; }
.parallax-glow {
    position: absolute;
    top: 50%;
    right: -200px;
    width: 600px;
    height: 600px;
    border-radius: 50%;
    background: radial-gradient(circle, rgba(139, 92, 246, 0.22), transparent 70%);
    pointer-events: none;
    will-change: transform;
}
.use-case-list { display: flex; flex-direction: column; gap: 24px; }
.use-case-card {
    display: grid;
    gap: 24px;
    padding: 32px;
    border-radius: var(--radius-card);
    background: var(--bg-surface);
    border: 1px solid var(--border-soft);
    border-left-width: 3px;
}
.use-case-card.tone-violet { border-left-color: var(--accent-violet); }
.use-case-card.tone-cyan { border-left-color: var(--accent-cyan); }
.use-case-card.tone-emerald { border-left-color: var(--accent-emerald); }
.use-case-category { font-family: var(--font-mono); font-size: 12px; letter-spacing: 0.1em; text-transform: uppercase; color: var(--text-dim); }
.use-case-title { margin: 8px 0 12px; font-size: 24px; font-weight: 700; color: var(--text-bright); }
.use-case-items { display: flex; flex-direction: column; gap: 10px; }
.use-case-items li { display: flex; align-items: center; gap: 10px; }
.bullet { width: 6px; height: 6px; border-radius: 50%; background: currentColor; }
.tone-violet .bullet { color: var(--accent-violet); }
.tone-cyan .bullet { color: var(--accent-cyan); }
.tone-emerald .bullet { color: var(--accent-emerald); }
.text-link { display: inline-flex; align-items: center; gap: 6px; margin-top: 16px; font-weight: 600; color: var(--text-bright); }
@media (min-width: 900px) { .use-case-card { grid-template-columns: 1.2fr 1fr; align-items: center; } }

/* How it works */
.timeline { position: relative; display: flex; flex-direction: column; gap: 72px; }
.timeline-line { display: none; }
.step { display: grid; gap: 32px; align-items: center; }
.step-number-row { display: flex; align-items: center; gap: 16px; margin-bottom: 16px; }
.step-number { font-family: var(--font-mono); font-size: 40px; font-weight: 700; color: var(--accent-violet); opacity: 0.5; }
.step-number-rule { flex: 1; height: 1px; background: var(--border-soft); }
.step-title { margin-bottom: 12px; font-size: 26px; font-weight: 700; color: var(--text-bright); }
.step-dot { display: none; }
.step-visual { padding: 28px; border-radius: var(--radius-card); background: var(--bg-surface); border: 1px solid var(--border-soft); }
.chip-row { display: flex; flex-wrap: wrap; gap: 10px; }
.chip { padding: 6px 14px; border-radius: var(--radius-pill); background: var(--bg-raised); border: 1px solid var(--border-soft); font-size: 13px; }
.pipeline { font-family: var(--font-mono); font-size: 13px; display: flex; flex-direction: column; gap: 8px; }
.pipeline-line { display: flex; gap: 10px; }
.pipeline-caret { color: var(--text-dim); }
.pipeline-done { color: var(--accent-emerald); }
.pipeline-running { color: var(--accent-cyan); }
.pipeline-pending { color: var(--text-dim); }
.region-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; }
.region { padding: 14px; border-radius: 12px; background: var(--bg-raised); }
.region-name { margin-top: 6px; font-weight: 600; color: var(--text-bright); }
.region-latency { font-family: var(--font-mono); font-size: 12px; color: var(--accent-emerald); }
.bar-chart { display: flex; align-items: flex-end; gap: 8px; height: 72px; }
.bar { flex: 1; border-radius: 4px 4px 0 0; background: var(--accent-gradient); }
.status-dot { display: inline-block; width: 8px; height: 8px; border-radius: 50%; background: var(--accent-emerald); }

@media (min-width: 900px) {
    .timeline-line {
        display: block;
        position: absolute;
        top: 0;
        bottom: 0;
        left: 50%;
        width: 1px;
        background: linear-gradient(var(--accent-violet), var(--accent-cyan));
        opacity: 0.3;
    }
    .step { grid-template-columns: 1fr auto 1fr; gap: 48px; }
    .step-reverse .step-copy { order: 3; }
    .step-reverse .step-visual { order: 1; }
    .step-reverse .step-dot { order: 2; }
    .step-dot {
        display: block;
        width: 14px;
        height: 14px;
        border-radius: 50%;
        background: var(--accent-violet);
        box-shadow: 0 0 0 6px rgba(139, 92, 246, 0.2);
    }
}

/* Testimonials */
.trusted-by { text-align: center; }
.trusted-by-label { font-size: 13px; text-transform: uppercase; letter-spacing: 0.12em; color: var(--text-dim); }
.logo-wall { display: flex; flex-wrap: wrap; justify-content: center; gap: 20px 48px; margin-top: 28px; }
.logo-word { font-size: 20px; font-weight: 700; color: var(--text-dim); opacity: 0.7; transition: opacity 0.2s ease; }
.logo-word:hover { opacity: 1; }
.carousel { max-width: 820px; margin: 0 auto; }
.carousel-stage { min-height: 280px; }
.testimonial-card {
    margin: 0;
    padding: 48px;
    border-radius: var(--radius-card);
    background: var(--bg-surface);
    border: 1px solid var(--border-soft);
    animation: testimonial-in 0.5s var(--ease-out);
}
@keyframes testimonial-in {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: none; }
}
.testimonial-quote { margin: 20px 0 32px; font-size: 21px; line-height: 1.55; color: var(--text-bright); }
.testimonial-author { display: flex; align-items: center; gap: 16px; }
.avatar {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    border-radius: 50%;
    font-weight: 700;
    color: #fff;
}
.author-meta { display: flex; flex-direction: column; }
.author-name { font-weight: 600; color: var(--text-bright); }
.author-role { font-size: 14px; color: var(--text-dim); }
.carousel-dots { display: flex; justify-content: center; gap: 10px; margin-top: 28px; }
.dot { width: 10px; height: 10px; padding: 0; border-radius: var(--radius-pill); background: var(--border-strong); transition: width 0.3s ease, background 0.3s ease; }
.dot.active { width: 32px; background: var(--accent-violet); }
.dot:focus-visible { outline: 2px solid var(--accent-cyan); outline-offset: 3px; }
.stats-row { display: grid; grid-template-columns: repeat(2, 1fr); gap: 32px; margin-top: 96px; text-align: center; }
.stat-value { font-size: 40px; font-weight: 800; }
.stat-label { margin-top: 4px; font-size: 14px; color: var(--text-dim); }
@media (min-width: 900px) { .stats-row { grid-template-columns: repeat(4, 1fr); } }

/* Pricing */
.plans-grid { display: grid; gap: 24px; align-items: stretch; }
.plan-card {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 24px;
    padding: 36px 32px;
    border-radius: var(--radius-card);
    background: var(--bg-surface);
    border: 1px solid var(--border-soft);
}
.plan-highlighted {
    border-color: rgba(139, 92, 246, 0.6);
    background: linear-gradient(180deg, rgba(139, 92, 246, 0.12), var(--bg-surface) 60%);
    box-shadow: 0 30px 80px rgba(139, 92, 246, 0.2);
}
.plan-badge {
    position: absolute;
    top: -13px;
    left: 50%;
    transform: translateX(-50%);
    padding: 4px 14px;
    border-radius: var(--radius-pill);
    background: var(--accent-gradient);
    font-size: 12px;
    font-weight: 700;
    color: #fff;
    white-space: nowrap;
}
.plan-name { font-size: 20px; font-weight: 700; color: var(--text-bright); }
.plan-description { margin-top: 6px; font-size: 14px; }
.plan-price { display: flex; align-items: baseline; gap: 6px; }
.plan-amount { font-size: 48px; font-weight: 800; letter-spacing: -0.03em; color: var(--text-bright); }
.plan-period { color: var(--text-dim); }
.plan-features { flex: 1; display: flex; flex-direction: column; gap: 12px; font-size: 15px; }
.plan-features li { display: flex; align-items: center; gap: 10px; }
@media (min-width: 900px) { .plans-grid { grid-template-columns: repeat(3, 1fr); } }

/* Call to action */
.cta-card {
    position: relative;
    overflow: hidden;
    padding: 80px 32px;
    border-radius: 28px;
    text-align: center;
    background: var(--bg-raised);
    border: 1px solid var(--border-strong);
}
.cta-glow { position: absolute; width: 360px; height: 360px; border-radius: 50%; filter: blur(100px); opacity: 0.45; }
.cta-glow-violet { background: var(--accent-violet); top: -160px; left: -80px; }
.cta-glow-cyan { background: var(--accent-cyan); bottom: -160px; right: -80px; }
.cta-body { position: relative; z-index: 1; }
.cta-description { max-width: 560px; margin: 24px auto 0; font-size: 18px; }
.cta-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-top: 40px; }
.cta-fineprint { margin-top: 24px; font-size: 13px; color: var(--text-dim); }

/* Footer */
.site-footer { padding: 80px 0 40px; border-top: 1px solid var(--border-soft); }
.footer-grid { display: grid; gap: 48px; grid-template-columns: repeat(2, 1fr); }
.footer-brand { grid-column: 1 / -1; }
.footer-tagline { max-width: 280px; margin-top: 16px; font-size: 14px; }
.social-links { display: flex; gap: 12px; margin-top: 24px; }
.social-link {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 36px;
    height: 36px;
    border-radius: 10px;
    border: 1px solid var(--border-soft);
    color: var(--text-dim);
    transition: color 0.2s ease, border-color 0.2s ease;
}
.social-link:hover { color: var(--text-bright); border-color: var(--border-strong); }
.footer-heading { margin-bottom: 16px; font-size: 14px; font-weight: 600; color: var(--text-bright); }
.footer-links { display: flex; flex-direction: column; gap: 10px; }
.footer-link { font-size: 14px; color: var(--text-dim); transition: color 0.2s ease; }
.footer-link:hover { color: var(--text-bright); }
.footer-bottom {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 16px;
    margin-top: 64px;
    padding-top: 24px;
    border-top: 1px solid var(--border-soft);
    font-size: 13px;
    color: var(--text-dim);
}
.system-status { display: inline-flex; align-items: center; gap: 8px; }
@media (min-width: 900px) {
    .footer-grid { grid-template-columns: 2fr repeat(4, 1fr); }
    .footer-brand { grid-column: auto; }
}
"#;
