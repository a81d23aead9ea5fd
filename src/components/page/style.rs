//! Stylesheet for the whole page.

/// Page stylesheet, injected once through `leptos_meta::Style`.
pub const PAGE_CSS: &str = r#"
@keyframes fadeIn {
	from { opacity: 0; }
	to { opacity: 1; }
}

@keyframes slideUp {
	from { opacity: 0; transform: translateY(30px); }
	to { opacity: 1; transform: translateY(0); }
}

@keyframes fadeInUp {
	from { opacity: 0; transform: translateY(20px); }
	to { opacity: 1; transform: translateY(0); }
}

@keyframes bounce {
	0%, 100% { transform: translateX(-50%) translateY(0); }
	50% { transform: translateX(-50%) translateY(10px); }
}

* { margin: 0; padding: 0; box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { overflow-x: hidden; }

.page {
	font-family: 'Berkeley Mono', 'IBM Plex Mono', 'SF Mono', monospace;
	background: #0a0a0a;
	color: #e8e8e8;
	min-height: 100vh;
	position: relative;
	overflow: hidden;
}

.grid-overlay {
	position: fixed;
	inset: 0;
	background-image:
		linear-gradient(rgba(255,255,255,0.01) 1px, transparent 1px),
		linear-gradient(90deg, rgba(255,255,255,0.01) 1px, transparent 1px);
	background-size: 60px 60px;
	pointer-events: none;
	opacity: 0.3;
	z-index: 0;
}

.site-nav {
	position: fixed;
	top: 0;
	left: 0;
	right: 0;
	padding: 1.5rem 2rem;
	display: flex;
	justify-content: space-between;
	align-items: center;
	background: transparent;
	border-bottom: 1px solid transparent;
	z-index: 1000;
}

.site-nav.scrolled {
	background: rgba(10,10,10,0.9);
	backdrop-filter: blur(10px);
	border-bottom-color: rgba(255,255,255,0.1);
}

.brand { font-size: 0.9rem; letter-spacing: 0.1em; font-weight: 500; }
.nav-links { display: flex; gap: 2rem; font-size: 0.85rem; }

.nav-link {
	color: #888;
	text-decoration: none;
	transition: color 0.3s ease;
	letter-spacing: 0.05em;
}
.nav-link:hover, .nav-link.active { color: #fff; }

.social-link {
	color: #888;
	transition: color 0.3s ease;
	display: flex;
	align-items: center;
	gap: 0.5rem;
	text-decoration: none;
}
.social-link:hover { color: #fff; }

.cta-button {
	padding: 0.9rem 2rem;
	background: #fff;
	color: #0a0a0a;
	text-decoration: none;
	font-size: 0.85rem;
	letter-spacing: 0.05em;
	font-weight: 500;
	transition: all 0.3s ease;
	border: 1px solid #fff;
}
.cta-button:hover { background: transparent; color: #fff; }
.cta-button.large { font-size: 1.2rem; padding: 1rem 2.5rem; }

section { position: relative; z-index: 1; border-top: 1px solid rgba(255,255,255,0.1); }

.eyebrow {
	font-size: 0.75rem;
	letter-spacing: 0.2em;
	color: #666;
	margin-bottom: 1rem;
	text-transform: uppercase;
}

h2 { font-size: 2.5rem; font-weight: 600; margin-bottom: 4rem; letter-spacing: -0.01em; }

.hero {
	min-height: 100vh;
	display: flex;
	flex-direction: column;
	justify-content: center;
	padding: 0 4rem;
	border-top: none;
	animation: fadeIn 1s ease-out;
}
.hero-body { max-width: 900px; animation: slideUp 1s ease-out; }
.hero h1 { font-size: 4.5rem; font-weight: 600; line-height: 1.1; margin-bottom: 1.5rem; letter-spacing: -0.02em; }
.tagline { font-size: 1.3rem; line-height: 1.6; color: #aaa; margin-bottom: 2rem; max-width: 650px; }
.summary { font-size: 1rem; line-height: 1.8; color: #888; margin-bottom: 3rem; max-width: 650px; }
.hero-actions { display: flex; gap: 1.5rem; align-items: center; }
.socials { display: flex; gap: 1rem; }
.socials.centered { justify-content: center; gap: 2rem; font-size: 0.9rem; }
.scroll-hint {
	position: absolute;
	bottom: 3rem;
	left: 50%;
	transform: translateX(-50%);
	color: #666;
	font-size: 1.75rem;
	text-decoration: none;
	animation: bounce 2s infinite;
}

.about { min-height: 60vh; padding: 8rem 4rem; display: flex; justify-content: center; align-items: center; }
.about-body { max-width: 900px; }
.about h2 { margin-bottom: 2rem; }
.about-columns {
	display: grid;
	grid-template-columns: 1fr 1fr;
	gap: 3rem;
	font-size: 1rem;
	line-height: 1.8;
	color: #aaa;
}
.about-columns p { margin-bottom: 1.5rem; }

.content-section { padding: 8rem 4rem; }
.content-body { max-width: 1200px; margin: 0 auto; }
.cards { display: flex; flex-direction: column; gap: 3rem; }

.card {
	padding: 2.5rem;
	border: 1px solid rgba(255,255,255,0.1);
	background: rgba(255,255,255,0.02);
	transition: all 0.3s ease;
	animation: fadeInUp 0.6s ease-out both;
}
.card:hover { border-color: rgba(255,255,255,0.3); background: rgba(255,255,255,0.04); }
.card-header { display: flex; justify-content: space-between; align-items: start; margin-bottom: 1.5rem; }
.card h3 { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.5rem; letter-spacing: -0.01em; }
.card-role { font-size: 0.9rem; color: #888; margin-bottom: 0.3rem; }
.card-period { font-size: 0.85rem; color: #666; letter-spacing: 0.05em; }
.card-description { font-size: 1rem; line-height: 1.7; color: #aaa; margin-bottom: 1.5rem; }
.metrics { display: flex; gap: 1.5rem; margin-bottom: 1.5rem; flex-wrap: wrap; color: #888; }
.metric {
	padding: 0.4rem 0.8rem;
	background: rgba(255,255,255,0.05);
	border: 1px solid rgba(255,255,255,0.1);
	font-family: 'SF Mono', monospace;
	font-size: 0.8rem;
}
.tags { display: flex; gap: 0.8rem; flex-wrap: wrap; }
.tag { font-size: 0.75rem; color: #666; letter-spacing: 0.05em; }

.skill-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.skill-group { padding: 2rem; }
.skill-group h3 { font-size: 1.1rem; margin-bottom: 1.5rem; color: #fff; letter-spacing: 0.05em; }
.skill-list { display: flex; flex-wrap: wrap; gap: 0.6rem; }
.skill {
	font-size: 0.85rem;
	color: #aaa;
	padding: 0.4rem 0.8rem;
	background: rgba(255,255,255,0.05);
	border: 1px solid rgba(255,255,255,0.08);
	transition: all 0.3s ease;
}
.skill:hover { border-color: rgba(255,255,255,0.3); color: #fff; }

.contact { min-height: 80vh; padding: 8rem 4rem; display: flex; justify-content: center; align-items: center; }
.contact-body { max-width: 700px; text-align: center; }
.contact h2 { font-size: 3rem; margin-bottom: 2rem; }
.pitch { font-size: 1.1rem; line-height: 1.8; color: #aaa; margin-bottom: 3rem; }
.contact-actions { display: flex; flex-direction: column; gap: 1rem; align-items: center; margin-bottom: 3rem; }
.contact-phone { font-size: 1rem; color: #888; }

.site-footer {
	position: relative;
	z-index: 1;
	padding: 2rem 4rem;
	border-top: 1px solid rgba(255,255,255,0.1);
	display: flex;
	justify-content: space-between;
	align-items: center;
	font-size: 0.85rem;
	color: #666;
}
.built-with { letter-spacing: 0.05em; }
"#;
