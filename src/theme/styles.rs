//! Global CSS styles for Story Card.
//!
//! Hand-drawn storybook look: peach paper, holly red, pine green.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --holly: #c21e1e;
  --holly-dark: #a01818;
  --pine: #2f5d40;
  --pine-dark: #234530;
  --peach: #f9bca4;
  --amber: #d27c37;
  --cocoa: #4a3728;
  --paper: #fdf5f0;

  --font-serif: 'Playfair Display', Georgia, serif;
  --font-cursive: 'Dancing Script', 'Brush Script MT', cursive;

  /* Flip timing */
  --flip-duration: 1s;
  --flip-angle: -165deg;
}

*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--peach);
  color: var(--cocoa);
  font-family: var(--font-serif);
}

/* === Page === */
.storybook {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  position: relative;
  overflow: hidden;
}

.storybook__decor { position: absolute; inset: 0; pointer-events: none; }
.decor { position: absolute; font-size: 6rem; opacity: 0.2; }
.decor--snow { top: 2.5rem; left: 2.5rem; transform: rotate(12deg); }
.decor--tree { bottom: 5rem; right: 2.5rem; transform: rotate(-12deg); }

.storybook__main {
  width: 100%;
  max-width: 56rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 2rem;
  position: relative;
  z-index: 10;
}

.storybook__header { text-align: center; }
.storybook__title { font-size: 3rem; color: var(--holly); }
.storybook__subtitle { font-family: var(--font-cursive); font-size: 1.25rem; color: var(--pine); font-weight: bold; font-style: italic; }
.storybook__actions { display: flex; gap: 1rem; justify-content: center; }

/* === Buttons === */
.btn-holly {
  display: flex; align-items: center; gap: 0.5rem;
  padding: 0.75rem 2rem;
  background: var(--holly); color: white;
  border: 4px solid rgba(255, 255, 255, 0.2); border-radius: 9999px;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
  cursor: pointer; transition: all 0.2s ease;
}
.btn-holly:hover { background: var(--holly-dark); transform: scale(1.05); }

.btn-pine {
  display: flex; align-items: center; justify-content: center; gap: 0.5rem;
  padding: 0.75rem; background: var(--pine); color: white;
  border: none; border-radius: 0.75rem; font-weight: bold; text-transform: uppercase; font-size: 0.875rem;
  cursor: pointer;
}
.btn-pine:hover { background: var(--pine-dark); }
.btn-pine.wide { width: 100%; }

.btn-link {
  background: none; border: none; color: var(--holly);
  font-weight: bold; font-size: 0.875rem; cursor: pointer;
}
.btn-link:hover { text-decoration: underline; }

/* === Card === */
.story-card {
  position: relative;
  width: 420px; height: 580px;
  perspective: 1500px;
}

.story-card__leaf {
  position: relative; width: 100%; height: 100%;
  transform-style: preserve-3d;
  transform-origin: left;
  transition: transform var(--flip-duration) ease;
  z-index: 10;
}
.story-card__leaf--open { transform: rotateY(var(--flip-angle)); }

.story-card__front {
  position: absolute; inset: 0; z-index: 20;
  backface-visibility: hidden;
  border-radius: 0 1rem 1rem 0; overflow: hidden;
  background: var(--peach); cursor: pointer;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.story-card__cover { width: 100%; height: 100%; object-fit: contain; mix-blend-mode: multiply; opacity: 0.9; }
.story-card__border { position: absolute; inset: 1.5rem; border: 4px double rgba(210, 124, 55, 0.2); border-radius: 0.5rem; pointer-events: none; }

.story-card__plate-wrap {
  position: absolute; top: 28%; left: 50%; transform: translateX(-50%);
  display: flex; flex-direction: column; align-items: center; z-index: 10;
  animation: bounce-slow 3s infinite ease-in-out;
}
.story-card__plate {
  width: 16rem; height: 16rem; background: white; border-radius: 9999px;
  border: 10px solid var(--holly); padding: 0.5rem;
  display: flex; align-items: center; justify-content: center;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); transition: transform 0.2s;
}
.story-card__plate:hover { transform: scale(1.1); animation: shake 0.5s infinite; }
.story-card__plate-inner {
  width: 100%; height: 100%; border: 6px dotted var(--pine); border-radius: 9999px; padding: 1rem;
  display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;
}
.story-card__plate-title { color: var(--holly); font-size: 1.875rem; font-weight: bold; font-style: italic; line-height: 1.1; }
.story-card__plate-rule { height: 2px; width: 3rem; background: var(--pine); margin: 0.5rem 0; }
.story-card__plate-to { font-family: var(--font-cursive); font-size: 1.5rem; }
.story-card__chevron { color: var(--pine); font-size: 1.75rem; animation: pulse 2s infinite; }
.story-card__open-hint {
  margin-top: 1.5rem; padding: 0.5rem 1.5rem; background: var(--pine); color: white;
  border: 2px solid white; border-radius: 9999px; font-size: 0.875rem; font-weight: bold;
  text-transform: uppercase; letter-spacing: 0.1em; animation: pulse 2s infinite;
}

.story-card__back {
  position: absolute; inset: 0;
  transform: rotateY(180deg); backface-visibility: hidden;
  background: var(--paper); border-radius: 1rem 0 0 1rem; padding: 2rem;
  display: flex; align-items: center; justify-content: center; text-align: center;
}
.story-card__back-frame {
  width: 100%; height: 100%; padding: 1.5rem;
  border: 4px solid rgba(47, 93, 64, 0.2); border-radius: 1rem; background: rgba(255, 255, 255, 0.5);
  display: flex; flex-direction: column; align-items: center; justify-content: space-between;
}
.story-card__gift { font-size: 3rem; }
.story-card__back-title { font-size: 1.875rem; color: var(--holly); font-style: italic; }
.story-card__stars { color: var(--amber); display: flex; gap: 0.25rem; justify-content: center; }
.story-card__quote { font-family: var(--font-cursive); font-size: 1.5rem; font-style: italic; line-height: 1.6; padding: 0 1rem; }
.story-card__back-actions { display: flex; flex-direction: column; gap: 1rem; width: 100%; }

.story-card__inner {
  position: absolute; inset: 0; z-index: 0;
  background: var(--paper); border-radius: 0 1rem 1rem 0; padding: 2rem;
  display: flex; flex-direction: column; overflow: hidden;
  border-left: 2px solid rgba(47, 93, 64, 0.1);
}
.story-card__photo {
  position: relative; flex: 1.2; min-height: 220px; margin-bottom: 1.5rem;
  border: 12px solid white; border-radius: 1rem; overflow: hidden; background: #f9fafb;
  display: flex; align-items: center; justify-content: center;
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}
.story-card__photo-img { width: 100%; height: 100%; object-fit: contain; transition: transform 0.7s; }
.story-card__photo:hover .story-card__photo-img { transform: scale(1.05); }
.story-card__sparkle { position: absolute; top: 1rem; right: 1rem; background: rgba(255, 255, 255, 0.9); padding: 0.5rem; border-radius: 9999px; color: var(--holly); }
.story-card__text { flex: 1; text-align: center; overflow-y: auto; }
.story-card__divider { color: var(--holly); margin-bottom: 0.5rem; }
.story-card__message { font-family: var(--font-cursive); font-size: 1.875rem; font-style: italic; line-height: 1.2; padding: 0 0.5rem; }
.story-card__footer { width: 100%; padding-top: 1rem; margin-top: 1rem; border-top: 1px solid rgba(47, 93, 64, 0.1); display: flex; flex-direction: column; gap: 0.75rem; }
.story-card__signoff { font-style: italic; color: var(--holly); font-size: 1.125rem; padding: 0 0.5rem; }
.story-card__player { animation: slide-up 0.7s ease; }
.story-card__iframe { border: 1px solid rgba(47, 93, 64, 0.1); border-radius: 0.75rem; }
.story-card__audio-toggle {
  display: flex; align-items: center; justify-content: center; gap: 0.5rem; width: 100%;
  padding: 0.5rem 1rem; background: white; color: var(--holly);
  border: 1px solid rgba(194, 30, 30, 0.2); border-radius: 0.75rem; font-weight: bold; font-size: 0.875rem;
  cursor: pointer;
}
.audio-icon--pulse { animation: pulse 2s infinite; }

/* === Snow === */
.snowflakes { position: absolute; inset: 0; pointer-events: none; }
.snowflake { position: absolute; top: -10%; color: white; opacity: 0.8; animation: snowfall 10s linear infinite; }
.snowflake:nth-child(1) { left: 5%; animation-delay: 0s; }
.snowflake:nth-child(2) { left: 15%; animation-delay: 1s; }
.snowflake:nth-child(3) { left: 25%; animation-delay: 6s; }
.snowflake:nth-child(4) { left: 35%; animation-delay: 4s; }
.snowflake:nth-child(5) { left: 45%; animation-delay: 2s; }
.snowflake:nth-child(6) { left: 55%; animation-delay: 8s; }
.snowflake:nth-child(7) { left: 65%; animation-delay: 6s; }
.snowflake:nth-child(8) { left: 75%; animation-delay: 2.5s; }
.snowflake:nth-child(9) { left: 85%; animation-delay: 1s; }
.snowflake:nth-child(10) { left: 95%; animation-delay: 3s; }

/* === Editor === */
.editor-panel {
  position: relative; width: 100%; max-width: 42rem; padding: 2rem; overflow: hidden;
  background: rgba(255, 255, 255, 0.9); border: 4px solid var(--pine); border-radius: 1.5rem;
  display: flex; flex-direction: column; gap: 1.5rem;
  animation: slide-up 0.5s ease;
}
.editor-panel__ribbon { position: absolute; top: 0; left: 0; width: 100%; height: 0.5rem; background: linear-gradient(to right, var(--holly), white, var(--pine)); }
.editor-panel__grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.editor-section { display: flex; flex-direction: column; gap: 1rem; }
.editor-section__label { font-size: 0.875rem; font-weight: bold; text-transform: uppercase; letter-spacing: 0.05em; }
.editor-section__label--holly { color: var(--holly); }
.editor-section__label--pine { color: var(--pine); }
.editor-message {
  width: 100%; padding: 1rem; border: 2px solid var(--peach); border-radius: 1rem; outline: none;
  font-family: var(--font-cursive); font-size: 1.5rem; background: white; transition: border-color 0.2s;
}
.editor-message:focus { border-color: var(--holly); }

.upload-tile { display: flex; flex-direction: column; gap: 0.5rem; }
.upload-tile__button {
  display: flex; flex-direction: column; align-items: center; justify-content: center;
  padding: 1.5rem; background: white; border: 4px dashed var(--peach); border-radius: 1rem; cursor: pointer;
}
.upload-tile__button:hover { background: rgba(249, 188, 164, 0.2); }
.upload-tile__button:disabled { opacity: 0.6; cursor: wait; }
.upload-tile__icon { font-size: 2rem; margin-bottom: 0.5rem; }
.upload-tile__label { font-size: 0.875rem; font-weight: bold; }
.upload-tile__error { font-size: 0.75rem; color: var(--holly); }

.music-option {
  display: flex; align-items: center; gap: 1rem; padding: 1rem;
  border: 2px solid rgba(210, 124, 55, 0.2); border-radius: 1rem; background: #f9fafb; opacity: 0.6;
  transition: all 0.2s;
}
.music-option--selected { border-color: var(--holly); background: white; opacity: 1; }
.music-option__body { flex: 1; display: flex; flex-direction: column; gap: 0.5rem; }
.music-option__title { font-size: 0.875rem; font-weight: bold; }
.music-option__status { font-size: 0.75rem; color: var(--pine); }

.upload-notice {
  display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.25rem;
  background: white; color: var(--holly); border: 2px solid var(--holly); border-radius: 9999px; font-size: 0.875rem;
}
.upload-notice__dismiss { background: none; border: none; color: var(--holly); font-size: 1.25rem; cursor: pointer; }

.hidden-audio { display: none; }

/* === Animations === */
@keyframes bounce-slow {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, -15px); }
}
@keyframes shake {
  0% { transform: translate(1px, 1px) rotate(0deg); }
  20% { transform: translate(-3px, 0px) rotate(1deg); }
  40% { transform: translate(1px, -1px) rotate(1deg); }
  60% { transform: translate(-3px, 1px) rotate(0deg); }
  80% { transform: translate(-1px, -1px) rotate(1deg); }
  100% { transform: translate(1px, -2px) rotate(-1deg); }
}
@keyframes pulse { 50% { opacity: 0.5; } }
@keyframes slide-up { from { transform: translateY(2rem); opacity: 0; } to { transform: translateY(0); opacity: 1; } }
@keyframes snowfall { to { transform: translateY(110vh); } }

@media (max-width: 768px) {
  .story-card { width: 320px; height: 450px; }
  .storybook__title { font-size: 2.25rem; }
  .editor-panel__grid { grid-template-columns: 1fr; }
}
"#;
