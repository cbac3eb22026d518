//! Injected document scripts.
//!
//! Each script is an IIFE keyed under `window.__folio*`, finds its root by
//! an id rendered by the owning component, and removes its own listeners
//! once that root is gone. The heavier decisions (scroll ratio, reveal
//! state) stay in Rust; these scripts only report geometry or move
//! decorative pixels.

/// Reports scroll samples back over `dioxus.send`: the scroll offsets plus
/// the bounding box of every `[data-reveal]` section.
pub(crate) fn scroll_feed_script() -> &'static str {
    r#"(function() {
        const state = window.__folioScrollFeed || (window.__folioScrollFeed = { handler: null });
        const detach = () => {
            if (state.handler) {
                window.removeEventListener("scroll", state.handler);
                window.removeEventListener("resize", state.handler);
                state.handler = null;
            }
        };
        detach();
        if (!document.getElementById("page-root")) return;
        const sample = () => {
            if (!document.getElementById("page-root")) {
                detach();
                return;
            }
            const sections = [];
            document.querySelectorAll("[data-reveal]").forEach((el) => {
                const rect = el.getBoundingClientRect();
                sections.push({ id: el.id, top: rect.top, bottom: rect.bottom });
            });
            dioxus.send({
                scroll_top: window.scrollY,
                scroll_height: document.documentElement.scrollHeight - window.innerHeight,
                viewport_height: window.innerHeight,
                sections: sections,
            });
        };
        state.handler = sample;
        window.addEventListener("scroll", sample, { passive: true });
        window.addEventListener("resize", sample);
        sample();
    })();"#
}

/// Custom cursor: the inner dot tracks the pointer directly, the outer ring
/// trails on a short timeout; interactive elements swell the ring, and
/// `.magnetic-btn` elements lean toward the pointer.
pub(crate) fn cursor_script() -> &'static str {
    r#"(function() {
        const state = window.__folioCursor || (window.__folioCursor = { attached: false, trail: null });
        if (state.attached) return;
        if (!document.getElementById("cursor-inner")) return;
        state.attached = true;
        const alive = () => document.getElementById("cursor-inner") !== null;
        const hoverTargets = "a, button, .project-card, .skill-card";
        window.addEventListener("pointermove", (e) => {
            if (!alive()) return;
            const inner = document.getElementById("cursor-inner");
            inner.style.left = e.clientX + "px";
            inner.style.top = e.clientY + "px";
            if (!state.trail) {
                state.trail = setTimeout(() => {
                    state.trail = null;
                    const outer = document.getElementById("cursor-outer");
                    if (outer) {
                        outer.style.left = e.clientX + "px";
                        outer.style.top = e.clientY + "px";
                    }
                }, 50);
            }
        });
        document.addEventListener("mouseover", (e) => {
            if (!alive() || !e.target.closest) return;
            const outer = document.getElementById("cursor-outer");
            if (outer && e.target.closest(hoverTargets)) outer.classList.add("cursor-outer--active");
        });
        document.addEventListener("mouseout", (e) => {
            if (!alive() || !e.target.closest) return;
            const outer = document.getElementById("cursor-outer");
            if (outer && e.target.closest(hoverTargets)) outer.classList.remove("cursor-outer--active");
        });
        document.addEventListener("mousemove", (e) => {
            if (!alive() || !e.target.closest) return;
            const btn = e.target.closest(".magnetic-btn");
            if (!btn) return;
            const rect = btn.getBoundingClientRect();
            const x = e.clientX - rect.left - rect.width / 2;
            const y = e.clientY - rect.top - rect.height / 2;
            btn.style.transform = "translate(" + x * 0.5 + "px, " + y * 0.5 + "px)";
        });
        document.addEventListener("mouseout", (e) => {
            if (!e.target.closest) return;
            const btn = e.target.closest(".magnetic-btn");
            if (btn && !btn.contains(e.relatedTarget)) btn.style.transform = "translate(0px, 0px)";
        });
    })();"#
}

/// Slides `[data-parallax]` decorations against the scroll direction; the
/// attribute value is the per-element speed factor.
pub(crate) fn parallax_script() -> &'static str {
    r#"(function() {
        const state = window.__folioParallax || (window.__folioParallax = { handler: null });
        if (state.handler) {
            window.removeEventListener("scroll", state.handler);
            state.handler = null;
        }
        if (!document.getElementById("page-root")) return;
        const update = () => {
            if (!document.getElementById("page-root")) {
                window.removeEventListener("scroll", state.handler);
                state.handler = null;
                return;
            }
            document.querySelectorAll("[data-parallax]").forEach((el) => {
                const speed = parseFloat(el.getAttribute("data-parallax")) || 0.15;
                el.style.transform = "translateY(" + (-window.scrollY * speed) + "px)";
            });
        };
        state.handler = update;
        window.addEventListener("scroll", update, { passive: true });
        update();
    })();"#
}

/// Smooth-scrolls the window back to the top.
pub(crate) fn scroll_to_top_script() -> &'static str {
    r#"window.scrollTo({ top: 0, behavior: "smooth" });"#
}
