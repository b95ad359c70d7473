//! Global CSS styles for the FinanSaaS landing page.
//!
//! Light marketing surface with green accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* GREEN (Primary, Highlights) */
  --green-50: #f0fdf4;
  --green-100: #dcfce7;
  --green-500: #22c55e;
  --green-600: #16a34a;
  --green-700: #15803d;
  --emerald-500: #10b981;
  --green-glow: rgba(34, 197, 94, 0.25);

  /* SLATE (Text, Surfaces) */
  --slate-50: #f8fafc;
  --slate-100: #f1f5f9;
  --slate-200: #e2e8f0;
  --slate-400: #94a3b8;
  --slate-500: #64748b;
  --slate-600: #475569;
  --slate-700: #334155;
  --slate-800: #1e293b;
  --slate-900: #0f172a;
  --slate-950: #020617;

  /* SEMANTIC */
  --danger: #f87171;
  --info: #3b82f6;

  /* Gradient */
  --gradient-primary: linear-gradient(135deg, var(--green-500) 0%, var(--emerald-500) 100%);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slide: 700ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: #ffffff;
  color: var(--slate-900);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

img { display: block; max-width: 100%; }

/* === Layout === */
.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1rem;
}

.container.narrow { max-width: 56rem; }

.section { padding: 6rem 0; position: relative; overflow: hidden; }
.section-muted { background: rgba(248, 250, 252, 0.5); }
.section-tint { background: rgba(240, 253, 244, 0.3); }
.section-band {
  padding: 4rem 0;
  border-top: 1px solid var(--slate-100);
  border-bottom: 1px solid var(--slate-100);
  background: rgba(248, 250, 252, 0.5);
}

.split {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

/* === Typography === */
.text-gradient {
  background: var(--gradient-primary);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.highlight {
  background: var(--green-100);
  padding: 0 0.25rem;
  border-radius: 0.25rem;
}

.accent { font-weight: 700; color: var(--green-600); }

.eyebrow {
  display: block;
  margin-bottom: 1rem;
  color: var(--green-600);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.15em;
  text-transform: uppercase;
}

.section-heading { text-align: center; margin-bottom: 4rem; }

.section-title {
  font-size: 2.75rem;
  font-weight: 700;
  line-height: 1.2;
  margin-bottom: 1.5rem;
}

.section-title.center { text-align: center; }

.section-lead {
  max-width: 42rem;
  margin: 0 auto;
  color: var(--slate-600);
}

.section-lead.left { margin: 0 0 2.5rem; font-size: 1.125rem; }

/* === Buttons === */
.btn-primary, .btn-hero, .btn-checkout {
  border: none;
  cursor: pointer;
  color: #ffffff;
  font-weight: 700;
  background: var(--gradient-primary);
  transition: all var(--transition-normal);
}

.btn-primary {
  padding: 0.625rem 1.5rem;
  border-radius: 9999px;
  box-shadow: 0 10px 15px -3px var(--green-glow);
}

.btn-primary:hover { opacity: 0.9; }

.btn-hero {
  padding: 1.25rem 2.5rem;
  border-radius: 1rem;
  font-size: 1.125rem;
  box-shadow: 0 25px 50px -12px rgba(34, 197, 94, 0.4);
}

.btn-hero:hover { transform: scale(1.05); }

.btn-pulse { animation: pulse-ring 2s infinite; }

@keyframes pulse-ring {
  0% { box-shadow: 0 0 0 0 rgba(34, 197, 94, 0.5); }
  70% { box-shadow: 0 0 0 18px rgba(34, 197, 94, 0); }
  100% { box-shadow: 0 0 0 0 rgba(34, 197, 94, 0); }
}

.btn-secondary {
  padding: 1.25rem 2.5rem;
  border-radius: 1rem;
  border: 1px solid var(--slate-200);
  background: var(--slate-50);
  color: var(--slate-700);
  font-size: 1.125rem;
  font-weight: 700;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-secondary:hover { background: var(--slate-100); }

.btn-link {
  border: none;
  background: none;
  color: inherit;
  font: inherit;
  font-weight: 600;
  text-align: left;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.btn-link:hover { color: var(--green-600); }

.btn-checkout {
  width: 100%;
  padding: 1.5rem;
  border-radius: 1rem;
  font-size: 1.25rem;
  margin: 2rem 0 1.5rem;
}

.icon-btn {
  border: none;
  cursor: pointer;
  border-radius: 9999px;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  border-bottom: 1px solid rgba(0, 0, 0, 0.05);
  background: rgba(255, 255, 255, 0.7);
  backdrop-filter: blur(12px);
}

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 2rem;
  height: 5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.navbar-links {
  display: flex;
  gap: 2rem;
  font-size: 0.875rem;
  color: var(--slate-600);
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  cursor: pointer;
}

.brand-mark {
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--green-500);
  color: #ffffff;
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px -3px var(--green-glow);
}

.brand-name { font-size: 1.5rem; font-weight: 700; letter-spacing: -0.02em; }

/* === Fade In === */
.fade-in {
  opacity: 0;
  transform: translateY(2rem);
  transition: all 1s ease;
}

.fade-in.visible { opacity: 1; transform: translateY(0); }

/* === Hero === */
.hero { position: relative; padding: 12rem 0 8rem; overflow: hidden; }

.hero-glow {
  position: absolute;
  top: 0;
  left: 50%;
  transform: translateX(-50%);
  width: 100%;
  height: 600px;
  background: rgba(34, 197, 94, 0.05);
  filter: blur(120px);
  border-radius: 9999px;
  z-index: -1;
}

.hero-content { text-align: center; }

.hero-badge {
  display: inline-flex;
  padding: 0.5rem 1rem;
  margin-bottom: 2rem;
  border-radius: 9999px;
  border: 1px solid var(--green-100);
  background: var(--green-50);
  color: var(--green-700);
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.1em;
}

.hero-title {
  font-size: 4.5rem;
  font-weight: 800;
  line-height: 1.1;
  letter-spacing: -0.02em;
  margin-bottom: 2rem;
}

.hero-subtitle {
  max-width: 56rem;
  margin: 0 auto 3rem;
  font-size: 1.25rem;
  color: var(--slate-600);
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-bottom: 4rem;
}

.video-frame {
  max-width: 64rem;
  margin: 0 auto;
  border-radius: 1.5rem;
  overflow: hidden;
  border: 1px solid var(--slate-100);
  background: #000000;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  aspect-ratio: 16 / 9;
}

.video-embed { width: 100%; height: 100%; border: 0; }

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.card-tile {
  padding: 2rem;
  border-radius: 1.5rem;
  border: 1px solid var(--slate-100);
  background: var(--slate-50);
  transition: all var(--transition-normal);
}

.card-tile:hover {
  border-color: #86efac;
  background: #ffffff;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.card-icon {
  width: 4rem;
  height: 4rem;
  margin-bottom: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 1rem;
  background: var(--green-50);
  font-size: 1.75rem;
  transition: all var(--transition-normal);
}

.card-tile:hover .card-icon { transform: scale(1.1); background: var(--green-500); }

.card-label {
  display: block;
  margin-bottom: 0.5rem;
  color: var(--green-600);
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.15em;
}

.card-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
.card-text { font-size: 0.875rem; color: var(--slate-600); }

/* === Stats === */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
  text-align: center;
}

.stat-value { font-size: 2.25rem; font-weight: 900; margin-bottom: 0.5rem; }

.stat-label {
  color: var(--slate-500);
  font-size: 0.875rem;
  font-weight: 700;
  letter-spacing: 0.15em;
  text-transform: uppercase;
}

/* === Browser Frame + Slider === */
.glass-card {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1rem;
  border-radius: 2rem;
  border: 1px solid var(--slate-200);
  background: rgba(248, 250, 252, 0.5);
  backdrop-filter: blur(8px);
}

.browser {
  height: 600px;
  display: flex;
  flex-direction: column;
  border-radius: 1rem;
  overflow: hidden;
  border: 1px solid var(--slate-800);
  background: var(--slate-900);
}

.browser-bar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
  background: var(--slate-950);
  border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}

.traffic-lights { display: flex; gap: 0.375rem; }
.light { width: 0.625rem; height: 0.625rem; border-radius: 9999px; }
.light.red { background: #ef4444; }
.light.yellow { background: #eab308; }
.light.green { background: var(--green-500); }

.browser-url {
  padding: 0.25rem 0.75rem;
  border-radius: 0.25rem;
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.4);
  font-family: monospace;
  font-size: 10px;
}

.browser-body { flex: 1; overflow: hidden; }

.slider {
  position: relative;
  width: 100%;
  height: 100%;
  overflow: hidden;
  border-radius: 0.75rem;
}

.slider-track {
  display: flex;
  height: 100%;
  transition: transform var(--transition-slide);
}

.slide { min-width: 100%; height: 100%; }
.slide-image { width: 100%; height: 100%; object-fit: cover; }

.slider-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 10;
  padding: 0.25rem 0.75rem;
  background: rgba(0, 0, 0, 0.5);
  color: #ffffff;
  font-size: 1.5rem;
  opacity: 0;
  transition: all var(--transition-normal);
}

.slider:hover .slider-arrow { opacity: 1; }
.slider-arrow:hover { background: var(--green-500); }
.slider-arrow.prev { left: 1rem; }
.slider-arrow.next { right: 1rem; }

.slider-dots {
  position: absolute;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  display: flex;
  gap: 0.375rem;
}

.slider-dot {
  width: 0.375rem;
  height: 0.375rem;
  border: none;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.3);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.slider-dot.active { width: 1rem; background: var(--green-500); }

/* === Check List === */
.check-list { list-style: none; display: flex; flex-direction: column; gap: 1rem; }
.check-item { display: flex; align-items: flex-start; gap: 1rem; }

.check-badge {
  flex-shrink: 0;
  width: 1.5rem;
  height: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--green-100);
  color: var(--green-600);
  font-size: 0.75rem;
}

.check-title { font-weight: 700; color: var(--slate-800); }
.check-detail { font-size: 0.875rem; color: var(--slate-500); }

/* === AI Chat === */
.chat-card {
  padding: 1.5rem;
  border-radius: 2.5rem;
  border: 1px solid var(--slate-200);
  background: #ffffff;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.chat-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
}

.chat-agent { display: flex; align-items: center; gap: 0.75rem; }

.chat-avatar {
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  background: var(--green-500);
}

.chat-name { font-size: 0.875rem; font-weight: 700; }

.chat-status {
  font-size: 10px;
  font-weight: 700;
  color: var(--green-600);
  text-transform: uppercase;
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.chat-log {
  height: 350px;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.chat-bubble {
  max-width: 85%;
  padding: 1rem;
  border-radius: 1rem;
  font-size: 0.875rem;
}

.chat-bubble.agent {
  border: 1px solid var(--slate-100);
  border-top-left-radius: 0;
  background: var(--slate-50);
  color: var(--slate-700);
}

.chat-bubble.user {
  margin-left: auto;
  text-align: right;
  border: 1px solid var(--green-600);
  border-top-right-radius: 0;
  background: var(--green-500);
  color: #ffffff;
}

.chat-compose {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem;
  border-radius: 1rem;
  border: 1px solid var(--slate-200);
  background: var(--slate-50);
}

.chat-compose .form-field { flex: 1; }
.chat-input { border: none; background: transparent; }

.chat-send {
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 0.75rem;
  background: var(--green-500);
  color: #ffffff;
  cursor: pointer;
}

/* === Inputs === */
.form-field { margin-bottom: 1rem; }

.input-label {
  display: block;
  margin-bottom: 0.375rem;
  color: var(--slate-500);
  font-size: 10px;
  font-weight: 700;
  letter-spacing: 0.15em;
  text-transform: uppercase;
}

.input-field {
  width: 100%;
  padding: 0.625rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--slate-200);
  background: var(--slate-50);
  color: var(--slate-900);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 600;
  transition: border-color var(--transition-fast);
}

.input-field:focus { outline: none; border-color: var(--green-500); }

/* === Color Swatches === */
.color-swatches { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.swatch {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.75rem;
  border: 2px solid transparent;
  opacity: 0.6;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.swatch:hover { opacity: 1; }

.swatch.selected {
  opacity: 1;
  transform: scale(1.1);
  border-color: var(--slate-900);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

/* === White-Label Simulator === */
.simulator {
  max-width: 87.5rem;
  display: grid;
  grid-template-columns: 4fr 8fr;
  gap: 2rem;
  align-items: start;
}

.simulator-controls { position: sticky; top: 8rem; }

.control-card {
  padding: 1.5rem;
  margin-bottom: 2rem;
  border-radius: 1.5rem;
  border: 1px solid var(--slate-200);
  background: #ffffff;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.control-card-header { text-align: center; margin-bottom: 1.5rem; }
.control-card-header .eyebrow { margin-bottom: 0.25rem; font-size: 10px; }
.control-card-header h3 { font-size: 1.125rem; }

.mock-wrapper {
  border-radius: 2rem;
  border: 1px solid var(--slate-200);
  background: #ffffff;
  overflow: hidden;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.mock-app { display: flex; min-height: 560px; font-size: 0.75rem; }

.mock-sidebar {
  width: 13rem;
  display: flex;
  flex-direction: column;
  padding: 1.25rem 1rem;
  border-right: 1px solid var(--slate-100);
  background: var(--slate-50);
}

.mock-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 2rem; }

.mock-brand-mark {
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.5rem;
  color: #ffffff;
}

.mock-brand-name {
  font-weight: 800;
  font-size: 0.875rem;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.mock-nav { display: flex; flex-direction: column; gap: 0.25rem; flex: 1; }

.mock-nav-item {
  display: flex;
  align-items: center;
  gap: 0.625rem;
  padding: 0.625rem 0.75rem;
  border-radius: 0.75rem;
  color: var(--slate-500);
  font-weight: 600;
}

.mock-nav-item.active { color: #ffffff; }

.mock-sidebar-footer { display: flex; flex-direction: column; gap: 0.75rem; }
.mock-whatsapp { padding: 0.75rem; border-radius: 0.75rem; background: #ffffff; }
.mock-status { display: flex; align-items: center; gap: 0.375rem; font-weight: 700; }

.status-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; }
.status-dot.offline { background: var(--danger); }

.mock-logout { color: var(--slate-400); font-weight: 600; }
.mock-caption { font-size: 10px; color: var(--slate-400); }

.mock-main { flex: 1; display: flex; flex-direction: column; }

.mock-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.875rem 1.25rem;
  border-bottom: 1px solid var(--slate-100);
}

.mock-search {
  padding: 0.5rem 0.75rem;
  min-width: 14rem;
  border-radius: 0.75rem;
  background: var(--slate-50);
  color: var(--slate-400);
}

.mock-user { display: flex; align-items: center; gap: 0.75rem; }
.mock-user-name { font-weight: 700; }

.mock-body { padding: 1.25rem; display: flex; flex-direction: column; gap: 1.25rem; }

.mock-title-row { display: flex; justify-content: space-between; align-items: center; }
.mock-title-row h2 { font-size: 1.125rem; font-weight: 800; }

.mock-action {
  padding: 0.5rem 0.875rem;
  border: none;
  border-radius: 0.75rem;
  color: #ffffff;
  font-weight: 700;
}

.mock-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }

.mock-stat {
  padding: 1rem;
  border-radius: 1rem;
  border: 1px solid var(--slate-100);
  background: #ffffff;
}

.mock-stat.featured { border-color: transparent; color: #ffffff; }

.mock-stat-label {
  margin-bottom: 0.5rem;
  font-size: 8px;
  font-weight: 900;
  letter-spacing: 0.15em;
  color: var(--slate-400);
}

.mock-stat.featured .mock-stat-label { color: rgba(255, 255, 255, 0.8); }
.mock-stat-value { font-size: 1.125rem; font-weight: 900; }
.mock-stat-detail { font-size: 7px; font-weight: 900; text-transform: uppercase; }

.tone-positive { color: var(--green-500); }
.tone-negative { color: var(--danger); }
.tone-info { color: var(--info); }
.tone-featured { color: #ffffff; }

.mock-charts { display: grid; grid-template-columns: 2fr 1fr; gap: 0.75rem; }

.mock-chart {
  padding: 1rem;
  border-radius: 1rem;
  border: 1px solid var(--slate-100);
  font-weight: 700;
}

.mock-chart-head { display: flex; justify-content: space-between; margin-bottom: 0.75rem; }
.mock-legend { display: flex; align-items: center; gap: 0.375rem; font-size: 10px; }
.legend-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; }
.legend-dot.muted { background: var(--slate-200); }
.legend-value { margin-left: auto; font-weight: 900; }

.chart-svg { height: 8rem; }
.chart-svg.donut { display: flex; justify-content: center; align-items: center; }

.chart-months {
  display: flex;
  justify-content: space-between;
  margin-top: 0.5rem;
  font-size: 8px;
  color: var(--slate-400);
}

.mock-footer {
  display: flex;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  border-top: 1px solid var(--slate-100);
  background: var(--slate-50);
  font-size: 10px;
  font-weight: 700;
  color: var(--slate-500);
}

.mock-domain { font-family: monospace; }

/* === Architecture === */
.devices { position: relative; display: flex; align-items: flex-end; gap: 1.5rem; }

.device {
  padding: 1.5rem;
  border-radius: 1.5rem;
  border: 1px solid var(--slate-200);
  background: #ffffff;
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.device.desktop { flex: 1; }
.device.phone { width: 8rem; }
.device-icon { font-size: 2rem; }

.wire-line { height: 0.5rem; margin-top: 0.75rem; border-radius: 9999px; background: var(--slate-100); }
.wire-line.wide { width: 100%; }
.wire-line.short { width: 50%; }
.wire-blocks { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; margin-top: 1rem; }
.wire-block { height: 3rem; border-radius: 0.5rem; background: var(--green-50); }

.arch-list { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.arch-item { display: flex; gap: 1rem; }

.arch-icon {
  flex-shrink: 0;
  width: 2.75rem;
  height: 2.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  background: var(--green-50);
}

.arch-title { font-weight: 700; }
.arch-text { font-size: 0.875rem; color: var(--slate-500); }

/* === Pricing === */
.pricing-card {
  position: relative;
  max-width: 32rem;
  margin: 0 auto;
  padding: 3rem 2.5rem;
  border-radius: 2.5rem;
  border: 2px solid var(--green-500);
  background: #ffffff;
  box-shadow: 0 25px 50px -12px var(--green-glow);
}

.pricing-ribbon {
  position: absolute;
  top: 0;
  left: 50%;
  transform: translate(-50%, -50%);
  padding: 0.5rem 1.5rem;
  border-radius: 9999px;
  background: var(--gradient-primary);
  color: #ffffff;
  font-size: 0.75rem;
  font-weight: 900;
  letter-spacing: 0.15em;
  white-space: nowrap;
}

.pricing-head { text-align: center; margin-bottom: 2rem; }
.pricing-head h3 { font-size: 1.5rem; font-weight: 700; }
.pricing-tagline { color: var(--slate-500); margin-bottom: 1.5rem; }
.pricing-amount { display: flex; justify-content: center; align-items: baseline; gap: 0.5rem; }
.pricing-currency { font-size: 1.5rem; font-weight: 700; color: var(--slate-400); }
.pricing-price { font-size: 4.5rem; font-weight: 900; letter-spacing: -0.04em; }

.pricing-terms {
  margin-top: 0.5rem;
  color: var(--green-600);
  font-size: 0.875rem;
  font-weight: 700;
  text-transform: uppercase;
}

.pricing-note {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  color: var(--slate-500);
  font-size: 0.75rem;
}

.payment-badges { display: flex; justify-content: center; gap: 1.5rem; margin-top: 1.5rem; opacity: 0.6; }
.payment-badge { height: 1.5rem; width: auto; }

.pricing-guarantee { margin-top: 2rem; text-align: center; color: var(--slate-500); font-size: 0.875rem; }

/* === FAQ === */
.faq-list { margin-top: 3rem; }
.faq-item { border-bottom: 1px solid var(--slate-100); }

.faq-question {
  width: 100%;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.5rem 0;
  border: none;
  background: none;
  color: var(--slate-800);
  font: inherit;
  font-size: 1.125rem;
  font-weight: 700;
  text-align: left;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.faq-question:hover { color: var(--green-600); }
.faq-chevron { color: var(--slate-400); }
.faq-question.open .faq-chevron { color: var(--green-500); }

.faq-answer {
  padding-bottom: 1.5rem;
  color: var(--slate-600);
  animation: fade-down 300ms ease;
}

@keyframes fade-down {
  from { opacity: 0; transform: translateY(-0.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Footer === */
.footer { padding: 5rem 0 3rem; border-top: 1px solid var(--slate-200); background: var(--slate-50); }

.footer-grid {
  display: grid;
  grid-template-columns: 3fr 1fr;
  gap: 3rem;
  margin-bottom: 4rem;
}

.footer-about .brand { margin-bottom: 2rem; cursor: default; }
.footer-blurb { max-width: 24rem; margin-bottom: 2rem; color: var(--slate-500); font-weight: 500; }
.footer-social { display: flex; gap: 1.5rem; font-size: 1.5rem; }
.footer-social a { color: var(--slate-400); text-decoration: none; }
.footer-social a:hover { color: var(--green-600); }

.footer-heading {
  margin-bottom: 1.5rem;
  color: var(--slate-400);
  font-size: 0.875rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
}

.footer-links { list-style: none; display: flex; flex-direction: column; gap: 1rem; color: var(--slate-500); font-size: 0.875rem; }

.footer-bottom {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding-top: 3rem;
  border-top: 1px solid var(--slate-200);
  color: var(--slate-500);
  font-size: 0.875rem;
}

.footer-secure {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--slate-400);
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
}

/* === Responsive === */
@media (max-width: 1024px) {
  .split, .simulator { grid-template-columns: 1fr; }
  .simulator-controls { position: static; }
  .card-grid { grid-template-columns: repeat(2, 1fr); }
  .hero-title { font-size: 3rem; }
}

@media (max-width: 768px) {
  .navbar-links { display: none; }
  .card-grid, .arch-list, .footer-grid { grid-template-columns: 1fr; }
  .stats-grid, .mock-stats { grid-template-columns: repeat(2, 1fr); }
  .hero-actions, .footer-bottom { flex-direction: column; }
  .browser { height: 400px; }
  .mock-sidebar { display: none; }
}
"#;
