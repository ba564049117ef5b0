//! Navigation shell.
//!
//! Holds the active panel and moves between panels as a unit: the previous
//! panel is unmounted before the next one is mounted.

use serde::{Deserialize, Serialize};

use crate::widget::{FrameId, FrameScheduler};

/// Panels reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    #[default]
    Dom,
    Events,
    Functional,
    Api,
    Widgets,
    TypeScript,
}

impl PanelId {
    /// Tab order.
    pub const ALL: [PanelId; 6] = [
        PanelId::Dom,
        PanelId::Events,
        PanelId::Functional,
        PanelId::Api,
        PanelId::Widgets,
        PanelId::TypeScript,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelId::Dom => "DOM et Objets JavaScript",
            PanelId::Events => "Programmation Événementielle",
            PanelId::Functional => "Programmation Fonctionnelle",
            PanelId::Api => "Intégration API",
            PanelId::Widgets => "Widgets et Graphisme 2D",
            PanelId::TypeScript => "Exemples TypeScript",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            PanelId::Dom => "Manipulation du DOM et gestion d'objets JavaScript",
            PanelId::Events => "Gestion des événements JavaScript et React",
            PanelId::Functional => {
                "Concepts de programmation fonctionnelle en JavaScript/TypeScript"
            }
            PanelId::Api => "Consommation d'APIs REST avec JavaScript/TypeScript",
            PanelId::Widgets => "Canvas HTML5 et graphiques avec Chart.js",
            PanelId::TypeScript => "Concepts avancés de TypeScript et bonnes pratiques",
        }
    }
}

/// A panel mounted and unmounted by the shell.
pub trait Panel {
    fn id(&self) -> PanelId;

    /// Acquire resources and start animations.
    fn mount(&mut self, frames: &mut FrameScheduler);

    /// Cancel pending frames and release resources. Must be idempotent.
    fn unmount(&mut self, frames: &mut FrameScheduler);

    /// Handle a due frame. Returns false when the frame is not this panel's.
    fn on_frame(&mut self, _id: FrameId, _now_ms: f64, _frames: &mut FrameScheduler) -> bool {
        false
    }
}

/// Lookup of the shell's panels by id.
pub trait PanelSet {
    fn panel_mut(&mut self, id: PanelId) -> &mut dyn Panel;
}

/// Panel without local resources: a title card for a peer module.
#[derive(Debug, Clone)]
pub struct InfoPanel {
    id: PanelId,
    mounted: bool,
}

impl InfoPanel {
    pub fn new(id: PanelId) -> Self {
        Self { id, mounted: false }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Panel for InfoPanel {
    fn id(&self) -> PanelId {
        self.id
    }

    fn mount(&mut self, _frames: &mut FrameScheduler) {
        self.mounted = true;
    }

    fn unmount(&mut self, _frames: &mut FrameScheduler) {
        self.mounted = false;
    }
}

/// Change of active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: PanelId,
    pub to: PanelId,
}

impl Transition {
    /// Unmount the previous panel, then mount the next one.
    pub fn apply<S: PanelSet + ?Sized>(self, panels: &mut S, frames: &mut FrameScheduler) {
        log::debug!("Switching panel {:?} -> {:?}", self.from, self.to);
        panels.panel_mut(self.from).unmount(frames);
        panels.panel_mut(self.to).mount(frames);
    }
}

/// Active panel tracking.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    active: PanelId,
}

impl Navigation {
    pub fn new(active: PanelId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> PanelId {
        self.active
    }

    /// Make `id` active. Returns `None` when it already is.
    pub fn select(&mut self, id: PanelId) -> Option<Transition> {
        if id == self.active {
            return None;
        }
        let transition = Transition { from: self.active, to: id };
        self.active = id;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recording {
        id: PanelId,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Panel for Recording {
        fn id(&self) -> PanelId {
            self.id
        }

        fn mount(&mut self, _frames: &mut FrameScheduler) {
            self.log.borrow_mut().push(format!("mount {:?}", self.id));
        }

        fn unmount(&mut self, _frames: &mut FrameScheduler) {
            self.log.borrow_mut().push(format!("unmount {:?}", self.id));
        }
    }

    struct Panels<P>(Vec<P>);

    impl<P: Panel> PanelSet for Panels<P> {
        fn panel_mut(&mut self, id: PanelId) -> &mut dyn Panel {
            let index = PanelId::ALL.iter().position(|p| *p == id).unwrap();
            &mut self.0[index]
        }
    }

    #[test]
    fn test_default_is_dom() {
        assert_eq!(Navigation::default().active(), PanelId::Dom);
    }

    #[test]
    fn test_select_same_panel_is_noop() {
        let mut nav = Navigation::default();
        assert_eq!(nav.select(PanelId::Dom), None);
    }

    #[test]
    fn test_select_reports_transition() {
        let mut nav = Navigation::default();
        let t = nav.select(PanelId::Widgets).unwrap();
        assert_eq!(t, Transition { from: PanelId::Dom, to: PanelId::Widgets });
        assert_eq!(nav.active(), PanelId::Widgets);
    }

    #[test]
    fn test_apply_mounts_target_only() {
        let mut frames = FrameScheduler::new();
        let mut panels = Panels(PanelId::ALL.iter().map(|id| InfoPanel::new(*id)).collect());
        panels.panel_mut(PanelId::Dom).mount(&mut frames);

        let mut nav = Navigation::default();
        nav.select(PanelId::Api).unwrap().apply(&mut panels, &mut frames);
        assert!(!panels.0[0].is_mounted());
        assert!(panels.0[3].is_mounted());
        assert_eq!(panels.0.iter().filter(|p| p.is_mounted()).count(), 1);
    }

    #[test]
    fn test_apply_unmounts_before_mounting() {
        let mut frames = FrameScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut panels = Panels(
            PanelId::ALL
                .iter()
                .map(|id| Recording { id: *id, log: Rc::clone(&log) })
                .collect(),
        );

        Transition { from: PanelId::Dom, to: PanelId::Widgets }.apply(&mut panels, &mut frames);
        assert_eq!(*log.borrow(), vec!["unmount Dom", "mount Widgets"]);
    }

    #[test]
    fn test_titles_are_distinct() {
        let mut titles: Vec<_> = PanelId::ALL.iter().map(|p| p.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PanelId::ALL.len());
    }
}
