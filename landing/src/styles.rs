//! Site stylesheet.
//!
//! Inlined into the document `<head>` by `aviz-prerender`. Warm amber on
//! white, mobile first; the desktop navigation takes over at 1024px.

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --amber-50: #fffbeb;
    --amber-100: #fef3c7;
    --amber-300: #fcd34d;
    --amber-400: #fbbf24;
    --amber-500: #f59e0b;
    --amber-600: #d97706;
    --amber-700: #b45309;
    --orange-50: #fff7ed;
    --orange-500: #f97316;
    --slate-50: #f8fafc;
    --slate-100: #f1f5f9;
    --slate-200: #e2e8f0;
    --slate-400: #94a3b8;
    --slate-500: #64748b;
    --slate-600: #475569;
    --slate-700: #334155;
    --slate-800: #1e293b;
    --slate-900: #0f172a;
    --green-100: #dcfce7;
    --green-500: #22c55e;
    --green-600: #16a34a;
    --brand-gradient: linear-gradient(90deg, var(--amber-500), var(--orange-500));
    --radius-lg: 1rem;
    --radius-xl: 1.5rem;
    --shadow-sm: 0 1px 2px rgba(15, 23, 42, 0.06);
    --shadow-lg: 0 10px 25px rgba(15, 23, 42, 0.12);
}

* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    color: var(--slate-800);
    background: #fff;
    line-height: 1.5;
}
img { display: block; max-width: 100%; }
a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; border: 0; background: none; color: inherit; }
h1, h2, h3, h4, p { margin: 0; }

.container { max-width: 80rem; margin: 0 auto; padding: 0 1rem; }
@media (min-width: 640px) { .container { padding: 0 1.5rem; } }
@media (min-width: 1024px) { .container { padding: 0 2rem; } }

/* Icons */
.icon { width: 1.5rem; height: 1.5rem; flex-shrink: 0; }
.icon-xs { width: 1rem; height: 1rem; }
.icon-sm { width: 1.25rem; height: 1.25rem; }
.icon-lg { width: 2rem; height: 2rem; }
.star-filled { fill: var(--amber-400); color: var(--amber-400); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.625rem 1.5rem;
    border-radius: 999px;
    font-weight: 600;
    font-size: 0.875rem;
    transition: transform 0.15s ease, box-shadow 0.15s ease;
}
.btn:hover { transform: scale(1.03); box-shadow: var(--shadow-lg); }
.btn-primary { background: var(--brand-gradient); color: #fff; }
.btn-secondary { background: #fff; color: var(--slate-700); border: 2px solid var(--slate-200); }
.btn-secondary:hover { border-color: var(--amber-300); color: var(--amber-600); }
.btn-large { padding: 1rem 2rem; font-size: 1rem; }
.btn-block { width: 100%; border-radius: 0.75rem; padding: 1rem; font-size: 1.125rem; font-weight: 700; }
.btn-call { background: var(--green-500); color: #fff; border-radius: 0.75rem; }
.btn-call:hover { background: var(--green-600); }
.btn-muted { background: var(--slate-100); color: var(--slate-700); }

/* Navigation */
.nav {
    position: fixed;
    inset: 0 0 auto 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    box-shadow: var(--shadow-sm);
}
.nav-inner { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
@media (min-width: 1024px) { .nav-inner { height: 5rem; } }
.nav-brand { display: flex; align-items: center; gap: 0.75rem; }
.nav-logo, .footer-logo {
    width: 3rem;
    height: 3rem;
    border-radius: 999px;
    background: #fff;
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 2px solid var(--amber-100);
}
.nav-brand-text { display: none; flex-direction: column; }
@media (min-width: 640px) { .nav-brand-text { display: flex; } }
.nav-title { font-size: 1.125rem; font-weight: 700; line-height: 1.2; }
.nav-tagline { font-size: 0.75rem; color: var(--slate-500); }
.nav-links { display: none; gap: 2rem; }
.nav-link { font-size: 0.875rem; font-weight: 500; color: var(--slate-600); transition: color 0.15s; }
.nav-link:hover, .nav-link.active { color: var(--amber-600); }
.nav-cta { display: none; }
.nav-toggle { padding: 0.5rem; color: var(--slate-600); }
@media (min-width: 1024px) {
    .nav-links { display: flex; }
    .nav-cta { display: inline-flex; }
    .nav-toggle, .nav-mobile { display: none; }
}
.nav-mobile { border-top: 1px solid var(--slate-100); background: #fff; padding: 1rem; display: grid; gap: 0.75rem; }
.nav-mobile-link { display: block; padding: 0.5rem 1rem; border-radius: 0.5rem; color: var(--slate-600); }
.nav-mobile-link:hover { background: var(--amber-50); color: var(--amber-600); }

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 6rem 0 3rem;
    background: linear-gradient(135deg, var(--amber-50), #fff 50%, var(--orange-50));
    overflow: hidden;
}
.hero-grid { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 1024px) { .hero-grid { grid-template-columns: 1fr 1fr; } }
.hero-content { display: grid; gap: 2rem; }
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    width: fit-content;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: var(--amber-100);
    color: var(--amber-700);
    font-size: 0.875rem;
    font-weight: 500;
}
.hero-title { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; line-height: 1.15; }
.hero-title-accent {
    background: var(--brand-gradient);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.hero-description { font-size: 1.125rem; color: var(--slate-600); max-width: 36rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.hero-stats { display: flex; gap: 2rem; padding-top: 1rem; }
.hero-stat { text-align: center; }
.hero-stat + .hero-stat { border-left: 1px solid var(--slate-200); padding-left: 2rem; }
.hero-stat-value { font-size: 1.875rem; font-weight: 700; }
.hero-stat-caption { font-size: 0.875rem; color: var(--slate-500); }
.hero-visual { position: relative; }
.hero-photo { border-radius: var(--radius-xl); overflow: hidden; box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25); }
.hero-photo img { width: 100%; height: 400px; object-fit: cover; }
@media (min-width: 1024px) { .hero-photo img { height: 500px; } }
.hero-card {
    position: absolute;
    left: -1.5rem;
    bottom: -1.5rem;
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1.5rem;
    max-width: 20rem;
    background: #fff;
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
}
.hero-card-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 999px;
    background: var(--green-100);
    color: var(--green-600);
    display: flex;
    align-items: center;
    justify-content: center;
}
.hero-card-title { font-weight: 600; }
.hero-card-caption { font-size: 0.875rem; color: var(--slate-500); }

/* Sections */
.section { padding: 5rem 0; }
@media (min-width: 1024px) { .section { padding: 7rem 0; } }
.section-header { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
.section-eyebrow {
    color: var(--amber-600);
    font-size: 0.875rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-bottom: 1rem;
}
.section-title { font-size: clamp(1.875rem, 3vw, 2.25rem); font-weight: 700; margin-bottom: 1.5rem; }
.section-description { font-size: 1.125rem; color: var(--slate-600); }
.card-grid { display: grid; gap: 2rem; }
@media (min-width: 768px) { .card-grid-2, .card-grid-3 { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .card-grid-3 { grid-template-columns: repeat(3, 1fr); } }
.card-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
.card-text { color: var(--slate-600); line-height: 1.7; }

.highlight-card { background: var(--slate-50); border-radius: var(--radius-lg); padding: 2rem; transition: box-shadow 0.2s; }
.highlight-card:hover { box-shadow: var(--shadow-lg); }
.highlight-icon, .facility-icon, .contact-row-icon {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 0.75rem;
    background: var(--amber-100);
    color: var(--amber-600);
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    transition: background 0.2s, color 0.2s;
}
.highlight-card:hover .highlight-icon { background: var(--amber-500); color: #fff; }

/* Philosophy */
.philosophy { background: linear-gradient(135deg, var(--amber-50), var(--orange-50)); }
.pillar-card {
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
    background: #fff;
    border-radius: var(--radius-lg);
    padding: 2rem;
    box-shadow: var(--shadow-sm);
}
.pillar-icon, .popup-emblem, .step-number {
    width: 4rem;
    height: 4rem;
    flex-shrink: 0;
    border-radius: var(--radius-lg);
    background: linear-gradient(135deg, var(--amber-400), var(--orange-500));
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
}
.values-panel { margin-top: 4rem; background: #fff; border-radius: var(--radius-xl); padding: 2rem; box-shadow: var(--shadow-sm); }
@media (min-width: 1024px) { .values-panel, .admissions-panel { padding: 3rem; } }
.values-title { font-size: 1.5rem; font-weight: 700; text-align: center; margin-bottom: 2.5rem; }
.values-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
@media (min-width: 1024px) { .values-grid { grid-template-columns: repeat(4, 1fr); } }
.value-chip {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    background: var(--slate-50);
    border-radius: 0.75rem;
    padding: 1rem;
    font-weight: 500;
    color: var(--slate-700);
}
.value-chip .icon { color: var(--amber-500); }

/* Facilities */
.facilities-grid { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 1024px) { .facilities-grid { grid-template-columns: 1fr 1fr; } }
.facilities .section-eyebrow, .facilities .section-title { text-align: left; }
.facilities .section-description { margin-bottom: 2rem; }
.facility-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 1rem; }
.facility-item {
    display: flex;
    align-items: center;
    gap: 1rem;
    background: var(--slate-50);
    border-radius: 0.75rem;
    padding: 1rem;
    font-weight: 500;
    color: var(--slate-700);
}
.facility-item .facility-icon { width: 2.5rem; height: 2.5rem; margin: 0; border-radius: 0.5rem; }
.photo-mosaic { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.photo-column { display: grid; gap: 1rem; }
.photo-column-offset { padding-top: 2rem; }
.photo-frame { border-radius: var(--radius-lg); overflow: hidden; box-shadow: var(--shadow-lg); }
.photo-frame img { width: 100%; height: 14rem; object-fit: cover; }

/* Testimonials */
.testimonials { background: var(--slate-50); }
.testimonial-card { margin: 0; background: #fff; border-radius: var(--radius-lg); padding: 2rem; box-shadow: var(--shadow-sm); }
.testimonial-stars { display: flex; gap: 0.25rem; margin-bottom: 1.5rem; }
.testimonial-quote { margin: 0 0 1.5rem; font-style: italic; color: var(--slate-600); line-height: 1.7; }
.testimonial-author { display: flex; align-items: center; gap: 1rem; }
.testimonial-avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 999px;
    background: var(--amber-100);
    color: var(--amber-700);
    font-weight: 700;
    font-size: 1.125rem;
    display: flex;
    align-items: center;
    justify-content: center;
}
.testimonial-name { display: block; font-weight: 600; }
.testimonial-role { display: block; font-size: 0.875rem; color: var(--slate-500); }

/* Admissions */
.admissions { background: linear-gradient(135deg, var(--amber-500), var(--orange-500)); }
.section-header-inverse .section-title { color: #fff; }
.section-header-inverse .section-description { color: rgba(255, 255, 255, 0.9); }
.admissions-badge {
    display: inline-block;
    margin-bottom: 1.5rem;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.2);
    color: #fff;
    font-size: 0.875rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}
.admissions-panel { max-width: 56rem; margin: 0 auto; background: #fff; border-radius: var(--radius-xl); padding: 2rem; box-shadow: var(--shadow-lg); }
.steps-grid { list-style: none; margin: 0; padding: 0; display: grid; gap: 2rem; }
@media (min-width: 768px) { .steps-grid { grid-template-columns: repeat(3, 1fr); } }
.step { text-align: center; color: var(--slate-600); }
.step .step-number { margin: 0 auto 1.5rem; border-radius: 999px; color: #fff; font-weight: 700; font-size: 1.25rem; }
.step .card-title { color: var(--slate-800); }
.admissions-cta { margin-top: 3rem; text-align: center; }

/* Contact */
.contact-grid { display: grid; gap: 3rem; }
@media (min-width: 1024px) { .contact-grid { grid-template-columns: 1fr 1fr; } }
.contact-info { display: grid; gap: 2rem; }
.contact-card { background: var(--slate-50); border-radius: var(--radius-lg); padding: 2rem; display: grid; gap: 1.5rem; }
.contact-row { display: flex; align-items: flex-start; gap: 1rem; }
.contact-row-icon { width: 3rem; height: 3rem; margin: 0; }
.contact-row-label { font-weight: 600; margin-bottom: 0.25rem; }
.contact-address { font-style: normal; color: var(--slate-600); }
.contact-address-line { display: block; }
.contact-link { color: var(--slate-600); transition: color 0.15s; }
.contact-link:hover { color: var(--amber-600); }
.contact-actions { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.contact-actions .btn { border-radius: 0.75rem; padding: 1rem 1.5rem; font-size: 1rem; }
.contact-map { background: var(--slate-50); border-radius: var(--radius-lg); padding: 0.5rem; min-height: 400px; }
.contact-map iframe { border: 0; border-radius: 0.75rem; min-height: 400px; }
.hours-table { list-style: none; margin: 0; padding: 0; font-size: 0.875rem; color: var(--slate-600); display: grid; gap: 0.25rem; }
.hours-row { display: flex; justify-content: space-between; gap: 2rem; }
.hours-closed { color: var(--amber-600); font-weight: 500; }
.hours-table-dark { font-size: 1rem; color: var(--slate-400); gap: 0.5rem; }
.hours-table-dark .hours-closed { color: var(--amber-400); }

/* Footer */
.footer { background: var(--slate-900); color: #fff; padding: 4rem 0; }
.footer-grid { display: grid; gap: 3rem; margin-bottom: 3rem; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-brand { grid-column: span 2; }
}
.footer-brand-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
.footer-logo { width: 3.5rem; height: 3.5rem; border-color: var(--amber-300); }
.footer-title { font-size: 1.25rem; font-weight: 700; }
.footer-tagline, .footer-summary { color: var(--slate-400); font-size: 0.875rem; }
.footer-summary { font-size: 1rem; line-height: 1.7; margin-bottom: 1.5rem; max-width: 28rem; }
.footer-social { display: flex; gap: 1rem; }
.footer-social-link {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 999px;
    background: var(--slate-800);
    display: flex;
    align-items: center;
    justify-content: center;
    transition: background 0.15s;
}
.footer-social-link:hover { background: var(--amber-500); }
.footer-heading { font-size: 1.125rem; font-weight: 700; margin-bottom: 1.5rem; }
.footer-links { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; }
.footer-link { display: inline-flex; align-items: center; gap: 0.5rem; color: var(--slate-400); transition: color 0.15s; }
.footer-link:hover { color: var(--amber-400); }
.footer-bottom {
    border-top: 1px solid var(--slate-800);
    padding-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 1rem;
    color: var(--slate-500);
    font-size: 0.875rem;
}

/* Popup */
.popup { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; padding: 1rem; }
.popup-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); backdrop-filter: blur(4px); }
.popup-panel {
    position: relative;
    width: 100%;
    max-width: 32rem;
    background: #fff;
    border-radius: var(--radius-xl);
    padding: 2rem;
    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.3);
    animation: popup-in 0.3s ease-out;
}
@keyframes popup-in {
    from { opacity: 0; transform: scale(0.95); }
    to { opacity: 1; transform: scale(1); }
}
.popup-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 999px;
    background: var(--slate-100);
    color: var(--slate-600);
    display: flex;
    align-items: center;
    justify-content: center;
}
.popup-close:hover { background: var(--slate-200); }
.popup-header { text-align: center; margin-bottom: 2rem; }
.popup-emblem { margin: 0 auto 1rem; border-radius: 999px; }
.popup-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
.popup-subtitle { font-size: 1.125rem; color: var(--amber-600); font-weight: 600; }
.popup-year { color: var(--slate-500); margin-top: 0.5rem; }
.popup-actions { display: grid; gap: 1rem; }
.popup-note { text-align: center; color: var(--slate-500); font-size: 0.875rem; margin-top: 1.5rem; }
"#;
