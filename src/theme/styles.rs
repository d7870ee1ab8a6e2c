//! Global CSS styles for Retouch.
//!
//! Dark editor chrome with a blue accent for the active control.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #111827;
  --panel-bg: rgba(31, 41, 55, 0.5);
  --panel-border: #374151;
  --control-bg: rgba(255, 255, 255, 0.1);
  --control-hover: rgba(255, 255, 255, 0.2);

  --accent: #3b82f6;
  --accent-strong: #2563eb;
  --accent-glow: rgba(59, 130, 246, 0.3);

  --text-primary: #e5e7eb;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  --font-sans: 'Inter', system-ui, sans-serif;
  --transition-fast: 200ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout === */
.editor {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  max-width: 960px;
  margin: 0 auto;
  padding: 1.5rem;
}

.editor-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.page-title {
  font-size: 1.75rem;
  font-weight: 700;
}

/* === Panels === */
.panel {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1rem;
  background: var(--panel-bg);
  border: 1px solid var(--panel-border);
  border-radius: 8px;
  backdrop-filter: blur(4px);
  animation: fade-in 300ms ease;
}

.panel-title {
  font-size: 1.125rem;
  font-weight: 600;
  text-align: center;
  color: var(--text-secondary);
}

.panel-subtitle {
  margin-top: -0.5rem;
  font-size: 0.875rem;
  text-align: center;
  color: var(--text-muted);
}

.option-grid {
  display: grid;
  gap: 0.5rem;
}

.option-grid.cols-4 { grid-template-columns: repeat(4, 1fr); }
.option-grid.cols-3 { grid-template-columns: repeat(3, 1fr); }

/* === Buttons === */
.btn-option {
  width: 100%;
  padding: 0.75rem 1rem;
  background: var(--control-bg);
  border: 1px solid transparent;
  border-radius: 6px;
  color: var(--text-primary);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-option:hover:not(:disabled) {
  background: var(--control-hover);
  border-color: var(--control-hover);
}

.btn-option.selected {
  box-shadow: 0 0 0 2px var(--bg), 0 0 0 4px var(--accent);
}

.btn-apply {
  width: 100%;
  padding: 1rem 1.5rem;
  background: linear-gradient(to bottom right, var(--accent-strong), var(--accent));
  border: none;
  border-radius: 8px;
  color: white;
  font-weight: 700;
  cursor: pointer;
  box-shadow: 0 10px 15px var(--accent-glow);
  transition: all 300ms ease-in-out;
}

.btn-apply:hover:not(:disabled) {
  transform: translateY(-1px);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
  transform: none;
}

/* === Sliders === */
.slider-group {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1rem;
  border-radius: 8px;
  transition: background var(--transition-fast);
}

.slider-group.active {
  background: rgba(0, 0, 0, 0.2);
}

.slider-label {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.slider-value {
  font-weight: 700;
  color: white;
}

.slider-input {
  width: 100%;
  cursor: pointer;
}

/* === Prompt Input === */
.prompt-input {
  width: 100%;
  padding: 1rem;
  background: #1f2937;
  border: 1px solid #4b5563;
  border-radius: 8px;
  color: var(--text-primary);
  font-size: 1rem;
}

.prompt-input:focus,
.prompt-input.active {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent);
}

.prompt-input:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

/* === Request Status === */
.request-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--panel-border);
}

.status-dot.busy {
  background: var(--accent);
  box-shadow: 0 0 10px var(--accent);
  animation: pulse 1.2s ease-in-out infinite;
}

/* === History === */
.history-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.history-item {
  display: grid;
  grid-template-columns: auto auto 1fr;
  gap: 0.75rem;
  font-size: 0.875rem;
}

.history-time { color: var(--text-muted); }
.history-source { font-weight: 600; }

.history-empty {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.875rem;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
