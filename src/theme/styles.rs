//! Global stylesheet for the showcase window.
//!
//! Colors come from the `:root` variables emitted by
//! [`token_variables`](super::token_variables); only layout and component
//! rules live here.

pub const GLOBAL_STYLES: &str = r#"
/* ============================================
   Base
   ============================================ */

* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

html, body {
    height: 100%;
    font-family: var(--font-sans);
    font-size: 14px;
    line-height: 1.5715;
    color: var(--neutral-1);
    background: var(--neutral-7);
    -webkit-font-smoothing: antialiased;
}

a {
    color: var(--b2);
    text-decoration: none;
}

.muted {
    color: var(--neutral-3);
    font-size: 12px;
}

.mono {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 12px;
}

.app {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.app-main {
    flex: 1;
    min-height: 0;
}

/* ============================================
   Top navigation
   ============================================ */

.top-nav {
    position: sticky;
    top: 0;
    z-index: 20;
    display: flex;
    align-items: center;
    gap: 24px;
    height: 56px;
    padding: 0 24px;
    background: var(--neutral-9);
    border-bottom: 1px solid var(--neutral-6);
}

.top-nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
}

.brand-mark {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 28px;
    height: 28px;
    border-radius: var(--radius-lg);
    background: var(--b2);
    color: var(--neutral-9);
    font-weight: 600;
}

.brand-title {
    font-size: 16px;
    font-weight: 600;
    white-space: nowrap;
}

.top-nav-links {
    display: flex;
    gap: 4px;
    flex: 1;
}

.top-nav-link {
    padding: 6px 12px;
    border-radius: var(--radius-lg);
    color: var(--neutral-2);
}

.top-nav-link:hover {
    color: var(--b2);
    background: var(--b8);
}

.top-nav-link.active {
    color: var(--b2);
    background: var(--b7);
    font-weight: 500;
}

.top-nav-history {
    display: flex;
    gap: 4px;
}

.history-btn {
    width: 32px;
    height: 32px;
    border: 1px solid var(--neutral-5);
    border-radius: var(--radius-lg);
    background: var(--neutral-9);
    color: var(--neutral-2);
    cursor: pointer;
}

.history-btn:hover {
    border-color: var(--b2);
    color: var(--b2);
}

/* ============================================
   Page layout
   ============================================ */

.page-layout {
    display: flex;
    align-items: flex-start;
}

.sidebar {
    position: sticky;
    top: 56px;
    width: 200px;
    height: calc(100vh - 56px);
    overflow-y: auto;
    flex-shrink: 0;
    background: var(--neutral-9);
    border-right: 1px solid var(--neutral-6);
}

.sidebar-list {
    list-style: none;
    padding: 12px 8px;
}

.sidebar-link {
    display: block;
    padding: 8px 12px;
    border-radius: var(--radius-lg);
    color: var(--neutral-2);
}

.sidebar-link:hover {
    background: var(--neutral-8);
}

.sidebar-link.active {
    color: var(--b2);
    background: var(--b8);
    font-weight: 500;
}

.page-content {
    flex: 1;
    min-width: 0;
    padding: 24px;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 16px;
}

.card-grid.mobile {
    grid-template-columns: repeat(auto-fill, minmax(360px, 1fr));
}

.card-span-1 { grid-column: span 1; }
.card-span-2 { grid-column: span 2; }
.card-span-full { grid-column: 1 / -1; }

@media (max-width: 1100px) {
    .card-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (max-width: 720px) {
    .card-grid { grid-template-columns: minmax(0, 1fr); }
    .card-span-2 { grid-column: span 1; }
    .sidebar { display: none; }
}

.showcase-card {
    padding: 20px;
    background: var(--neutral-9);
    border: 1px solid var(--neutral-6);
    border-radius: var(--radius-lg);
    scroll-margin-top: 72px;
    transition: box-shadow 0.2s, border-color 0.2s;
}

.showcase-card:hover {
    box-shadow: var(--shadow-1);
}

.showcase-card.active {
    border-color: var(--b5);
    box-shadow: var(--shadow-2);
}

.card-title {
    font-size: 16px;
    font-weight: 600;
    margin-bottom: 4px;
}

.card-description {
    color: var(--neutral-3);
    font-size: 12px;
    margin-bottom: 12px;
}

.card-body {
    margin-top: 12px;
}

.demo-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 12px;
}

.demo-column {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.code-row {
    display: flex;
    align-items: center;
    gap: 8px;
}

.code-block {
    padding: 12px;
    border-radius: var(--radius-lg);
    background: var(--neutral-8);
    border: 1px solid var(--neutral-6);
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 12px;
    white-space: pre-wrap;
    word-break: break-all;
}

/* ============================================
   Design tokens page
   ============================================ */

.design-card,
.token-section {
    padding: 24px;
    margin-bottom: 16px;
    background: var(--neutral-9);
    border-radius: var(--radius-lg);
    scroll-margin-top: 72px;
}

.section-title {
    font-size: 18px;
    font-weight: 600;
    margin-bottom: 16px;
}

.palette {
    margin-bottom: 20px;
}

.palette-header {
    display: flex;
    align-items: baseline;
    gap: 12px;
    margin-bottom: 8px;
}

.swatch-row {
    display: grid;
    grid-template-columns: repeat(8, minmax(0, 1fr));
    gap: 8px;
}

.swatch {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.swatch-color {
    height: 48px;
    border-radius: var(--radius-lg);
}

.swatch-color.bordered {
    border: 1px solid var(--neutral-5);
}

.swatch-token {
    font-weight: 500;
    font-size: 12px;
}

.swatch-hex {
    color: var(--neutral-3);
    font-size: 12px;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.neutral-grid {
    display: grid;
    grid-template-columns: repeat(5, minmax(0, 1fr));
    gap: 12px;
}

.neutral {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.token-table {
    width: 100%;
    border-collapse: collapse;
}

.token-table th,
.token-table td {
    padding: 10px 12px;
    text-align: left;
    border-bottom: 1px solid var(--neutral-6);
}

.token-table th {
    color: var(--neutral-2);
    font-weight: 500;
    background: var(--neutral-8);
}

.radius-grid,
.shadow-grid {
    display: grid;
    grid-template-columns: repeat(4, minmax(0, 1fr));
    gap: 16px;
}

.shadow-grid {
    grid-template-columns: repeat(3, minmax(0, 1fr));
}

.radius-sample,
.shadow-sample {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    text-align: center;
}

.radius-box {
    width: 64px;
    height: 64px;
    background: var(--b7);
    border: 1px solid var(--b5);
}

.shadow-box {
    width: 100%;
    height: 80px;
    border-radius: var(--radius-lg);
    background: var(--neutral-9);
}

/* ============================================
   Buttons
   ============================================ */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 6px;
    height: 32px;
    padding: 0 16px;
    border: 1px solid transparent;
    border-radius: var(--radius-sm);
    font-size: 14px;
    font-family: inherit;
    cursor: pointer;
    transition: background 0.2s, border-color 0.2s, color 0.2s;
}

.btn:disabled {
    cursor: not-allowed;
    opacity: 0.5;
}

.btn-default {
    background: var(--b2);
    color: var(--neutral-9);
}

.btn-default:hover:not(:disabled) {
    background: var(--b3);
}

.btn-destructive {
    background: var(--r2);
    color: var(--neutral-9);
}

.btn-destructive:hover:not(:disabled) {
    background: var(--r3);
}

.btn-outline {
    background: var(--neutral-9);
    border-color: var(--neutral-5);
    color: var(--neutral-1);
}

.btn-outline:hover:not(:disabled) {
    border-color: var(--b2);
    color: var(--b2);
}

.btn-secondary {
    background: var(--b8);
    color: var(--b2);
}

.btn-secondary:hover:not(:disabled) {
    background: var(--b7);
}

.btn-ghost {
    background: transparent;
    color: var(--neutral-1);
}

.btn-ghost:hover:not(:disabled) {
    background: var(--neutral-8);
}

.btn-link {
    background: transparent;
    color: var(--b2);
    padding: 0 4px;
}

.btn-link:hover:not(:disabled) {
    text-decoration: underline;
}

.btn-sm {
    height: 24px;
    padding: 0 8px;
    font-size: 12px;
}

.btn-icon {
    width: 32px;
    padding: 0;
}

.btn-block {
    display: flex;
    width: 100%;
}

.btn.mobile {
    height: 44px;
    width: 100%;
    border-radius: 22px;
    font-size: 16px;
}

/* ============================================
   Badges
   ============================================ */

.badge {
    display: inline-flex;
    align-items: center;
    padding: 0 8px;
    height: 22px;
    border-radius: var(--radius-sm);
    font-size: 12px;
    white-space: nowrap;
}

.badge-blue { background: var(--b8); color: var(--b2); }
.badge-red { background: var(--r8); color: var(--r1); }
.badge-orange { background: var(--o8); color: var(--o1); }
.badge-green { background: var(--g8); color: var(--g1); }
.badge-teal { background: var(--t8); color: var(--t1); }
.badge-purple { background: var(--p8); color: var(--p1); }
.badge-neutral { background: var(--neutral-7); color: var(--neutral-2); }

/* ============================================
   Form controls
   ============================================ */

.form-field {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.demo-form {
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.input-label {
    color: var(--neutral-2);
}

.input-required {
    color: var(--r2);
}

.input-hint {
    color: var(--neutral-3);
    font-size: 12px;
}

.input-field,
.select {
    height: 32px;
    width: 100%;
    padding: 0 12px;
    border: 1px solid var(--neutral-5);
    border-radius: var(--radius-sm);
    background: var(--neutral-9);
    color: var(--neutral-1);
    font-size: 14px;
    font-family: inherit;
    outline: none;
}

.input-field:focus,
.select:focus {
    border-color: var(--b2);
    box-shadow: 0 0 0 2px var(--b7);
}

.input-field::placeholder {
    color: var(--neutral-3);
}

.input-field:disabled {
    background: var(--neutral-8);
    color: var(--neutral-4);
    cursor: not-allowed;
}

.input-field.mobile,
.select.mobile {
    height: 44px;
    font-size: 16px;
}

.form-error {
    color: var(--r2);
    font-size: 12px;
}

.search-input-wrapper {
    position: relative;
}

.search-icon {
    position: absolute;
    left: 10px;
    top: 50%;
    transform: translateY(-50%);
    font-size: 12px;
    color: var(--neutral-3);
}

.search-input {
    padding-left: 30px;
}

.checkbox,
.radio {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    cursor: pointer;
}

.checkbox input,
.radio input {
    width: 16px;
    height: 16px;
    accent-color: var(--b2);
}

.checkbox.disabled {
    color: var(--neutral-4);
    cursor: not-allowed;
}

.radio.mobile input,
.checkbox.mobile input {
    width: 20px;
    height: 20px;
}

.switch-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
}

.switch {
    position: relative;
    width: 44px;
    height: 22px;
    border: none;
    border-radius: 11px;
    background: var(--neutral-4);
    cursor: pointer;
    transition: background 0.2s;
}

.switch.on {
    background: var(--b2);
}

.switch.disabled {
    opacity: 0.4;
    cursor: not-allowed;
}

.switch-thumb {
    position: absolute;
    top: 2px;
    left: 2px;
    width: 18px;
    height: 18px;
    border-radius: var(--radius-full);
    background: var(--neutral-9);
    box-shadow: var(--shadow-1);
    transition: left 0.2s;
}

.switch.on .switch-thumb {
    left: 24px;
}

.slider {
    width: 100%;
    accent-color: var(--b2);
}

.progress-row {
    display: flex;
    align-items: center;
    gap: 12px;
}

.progress {
    flex: 1;
    height: 8px;
    border-radius: 4px;
    background: var(--neutral-6);
    overflow: hidden;
}

.progress-bar {
    height: 100%;
    background: var(--b2);
    transition: width 0.3s;
}

.upload-zone {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    padding: 24px;
    border: 1px dashed var(--neutral-5);
    border-radius: var(--radius-lg);
    background: var(--neutral-8);
    text-align: center;
}

.upload-zone:hover {
    border-color: var(--b2);
}

.upload-file {
    color: var(--b2);
}

/* ============================================
   Data table
   ============================================ */

.table-wrapper {
    overflow-x: auto;
}

.data-table {
    width: 100%;
    border-collapse: collapse;
}

.data-table th,
.data-table td {
    padding: 10px 12px;
    text-align: left;
    border-bottom: 1px solid var(--neutral-6);
    white-space: nowrap;
}

.data-table th {
    background: var(--neutral-8);
    color: var(--neutral-2);
    font-weight: 500;
}

.data-table tr.selected td {
    background: var(--b8);
}

.sortable {
    cursor: pointer;
    user-select: none;
}

.sortable:hover {
    color: var(--b2);
}

.sort-indicator {
    margin-left: 4px;
    color: var(--neutral-3);
}

.table-check {
    width: 40px;
}

/* ============================================
   Pagination
   ============================================ */

.pagination {
    display: flex;
    align-items: center;
    gap: 8px;
}

.page-btn {
    min-width: 32px;
    height: 32px;
    padding: 0 6px;
    border: 1px solid var(--neutral-5);
    border-radius: var(--radius-sm);
    background: var(--neutral-9);
    color: var(--neutral-1);
    cursor: pointer;
}

.page-btn:hover:not(:disabled) {
    border-color: var(--b2);
    color: var(--b2);
}

.page-btn.active {
    border-color: var(--b2);
    background: var(--b2);
    color: var(--neutral-9);
}

.page-btn:disabled {
    color: var(--neutral-4);
    cursor: not-allowed;
}

/* ============================================
   Time picker
   ============================================ */

.time-picker {
    position: relative;
    display: inline-block;
}

.time-trigger {
    min-width: 140px;
    height: 32px;
    padding: 0 12px;
    border: 1px solid var(--neutral-5);
    border-radius: var(--radius-sm);
    background: var(--neutral-9);
    text-align: left;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    cursor: pointer;
}

.time-trigger.placeholder {
    color: var(--neutral-3);
}

.time-popover {
    position: absolute;
    top: 36px;
    left: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    gap: 4px;
    padding: 8px;
    border-radius: var(--radius-lg);
    background: var(--neutral-9);
    box-shadow: var(--shadow-2);
}

.time-field {
    width: 44px;
    height: 32px;
    border: 1px solid var(--neutral-5);
    border-radius: var(--radius-sm);
    text-align: center;
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
}

.time-field:focus {
    border-color: var(--b2);
    outline: none;
}

.time-separator {
    color: var(--neutral-3);
}

/* ============================================
   Transfer
   ============================================ */

.transfer {
    display: flex;
    align-items: center;
    gap: 12px;
}

.transfer-list {
    flex: 1;
    min-width: 0;
    height: 260px;
    display: flex;
    flex-direction: column;
    border: 1px solid var(--neutral-5);
    border-radius: var(--radius-lg);
    background: var(--neutral-9);
}

.transfer-header {
    display: flex;
    justify-content: space-between;
    padding: 8px 12px;
    border-bottom: 1px solid var(--neutral-6);
    background: var(--neutral-8);
}

.transfer-title {
    font-weight: 500;
}

.transfer-count {
    color: var(--neutral-3);
    font-size: 12px;
}

.transfer-list .search-input-wrapper {
    margin: 8px;
}

.transfer-items {
    flex: 1;
    overflow-y: auto;
    list-style: none;
    padding: 4px 0;
}

.transfer-item {
    padding: 4px 12px;
}

.transfer-item:hover {
    background: var(--neutral-8);
}

.transfer-item.disabled {
    color: var(--neutral-4);
}

.transfer-empty {
    padding: 24px;
    text-align: center;
    color: var(--neutral-3);
}

.transfer-actions {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

/* ============================================
   Tree
   ============================================ */

.tree {
    list-style: none;
}

.tree-row {
    display: flex;
    align-items: center;
    gap: 6px;
    height: 32px;
    padding-right: 8px;
    border-radius: var(--radius-sm);
    cursor: pointer;
}

.tree-row:hover {
    background: var(--neutral-8);
}

.tree-row.selected {
    background: var(--b8);
    color: var(--b2);
}

.tree-caret {
    width: 12px;
    color: var(--neutral-3);
    font-size: 10px;
}

.tree-icon {
    width: 16px;
}

/* ============================================
   Icon gallery
   ============================================ */

.masonry {
    display: flex;
    align-items: flex-start;
    gap: 16px;
}

.masonry-column {
    flex: 1;
    min-width: 0;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.icon-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(88px, 1fr));
    gap: 8px;
}

.icon-tile {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 6px;
    padding: 12px 4px;
    border: 1px solid transparent;
    border-radius: var(--radius-lg);
    background: var(--neutral-8);
    color: var(--neutral-1);
    font-family: inherit;
    cursor: pointer;
    transition: border-color 0.2s, background 0.2s;
}

.icon-tile:hover {
    border-color: var(--b5);
    background: var(--b8);
}

.icon-tile.copied {
    border-color: var(--g2);
    background: var(--g8);
}

.icon-glyph {
    font-size: 18px;
    font-weight: 600;
    color: var(--b2);
}

.icon-name {
    font-size: 11px;
    color: var(--neutral-2);
    word-break: break-all;
    text-align: center;
}

/* ============================================
   Examples
   ============================================ */

.example-panel {
    padding: 24px;
    background: var(--neutral-9);
    border-radius: var(--radius-lg);
    scroll-margin-top: 72px;
}

.tabs {
    display: flex;
    gap: 24px;
    border-bottom: 1px solid var(--neutral-6);
    margin-bottom: 16px;
}

.tab {
    padding: 8px 0;
    border: none;
    border-bottom: 2px solid transparent;
    background: none;
    color: var(--neutral-2);
    font-size: 14px;
    cursor: pointer;
}

.tab.active {
    color: var(--b2);
    border-bottom-color: var(--b2);
}

.login-example {
    display: flex;
    gap: 24px;
    min-height: 420px;
}

.login-hero {
    flex: 1;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 32px;
    border-radius: var(--radius-lg);
    background: linear-gradient(135deg, var(--b2), var(--t2));
    color: var(--neutral-9);
}

.login-panel {
    width: 360px;
    display: flex;
    flex-direction: column;
    gap: 12px;
    padding: 32px;
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-2);
}

.chat {
    display: flex;
    flex-direction: column;
    height: 480px;
    border: 1px solid var(--neutral-6);
    border-radius: var(--radius-lg);
}

.chat-messages {
    flex: 1;
    overflow-y: auto;
    display: flex;
    flex-direction: column;
    gap: 12px;
    padding: 16px;
    background: var(--neutral-8);
}

.chat-bubble {
    max-width: 70%;
    padding: 8px 12px;
    border-radius: var(--radius-lg);
}

.chat-bubble.assistant {
    align-self: flex-start;
    background: var(--neutral-9);
    box-shadow: var(--shadow-1);
}

.chat-bubble.user {
    align-self: flex-end;
    background: var(--b2);
    color: var(--neutral-9);
}

.chat-bubble.typing {
    color: var(--neutral-3);
    font-style: italic;
}

.chat-time {
    display: block;
    margin-top: 4px;
    font-size: 11px;
    opacity: 0.7;
}

.chat-compose {
    display: flex;
    gap: 8px;
    padding: 12px;
    border-top: 1px solid var(--neutral-6);
}

.assistant {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.assistant-create {
    display: flex;
    flex-direction: column;
    gap: 12px;
    padding: 16px;
    border-radius: var(--radius-lg);
    background: var(--neutral-8);
}

.task-list {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.task-item {
    display: flex;
    flex-direction: column;
    gap: 4px;
    padding: 12px;
    border: 1px solid var(--neutral-6);
    border-radius: var(--radius-lg);
}

.task-summary {
    color: var(--neutral-2);
}

.exam {
    display: flex;
    gap: 16px;
}

.exam-list {
    width: 260px;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.exam-item {
    padding: 10px 12px;
    border-radius: var(--radius-lg);
    cursor: pointer;
}

.exam-item:hover {
    background: var(--neutral-8);
}

.exam-item.active {
    background: var(--b8);
    color: var(--b2);
}

.exam-preview {
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.exam-chat {
    flex: 1;
}

/* ============================================
   Mobile components
   ============================================ */

.phone-frame {
    width: 100%;
    max-width: 375px;
    margin: 0 auto;
    padding: 16px;
    border: 8px solid var(--neutral-1);
    border-radius: 24px;
    background: var(--neutral-9);
    font-size: 16px;
}

.bottom-nav {
    display: flex;
    justify-content: space-around;
    border-top: 1px solid var(--neutral-6);
    padding-top: 6px;
}

.bottom-nav-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2px;
    border: none;
    background: none;
    color: var(--neutral-3);
    cursor: pointer;
}

.bottom-nav-item.active {
    color: var(--b2);
}

.bottom-nav-icon {
    font-size: 20px;
}

.bottom-nav-label {
    font-size: 11px;
}
"#;
