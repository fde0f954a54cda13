//! Scene files
//!
//! A scene describes a handful of animated components in TOML:
//!
//! ```toml
//! [config]
//! transform_property = "transform"
//!
//! # Store defaults, keyed by descriptor name (or animation name)
//! [defaults.move_to_right]
//! width = 320
//!
//! [[component]]
//! name = "card"
//! root = { render_id = ".0", dom_id = "card" }
//! refs = { icon = { render_id = ".0.1" } }
//! animations = [{ animation = "fade" }, { animation = "move_to_right", source = "icon" }]
//! state = { index = 1, step = 0 }
//!
//! [component.animate_props.icon]
//! index = 1
//! step = 0
//! ```

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use motif_animation::{
    AnimateConfig, AnimateContext, AnimatedComponent, ComponentProps, ComponentState,
    FlushReport, FrameScheduler, StyleMap,
};
use motif_core::{Document, ParamStore, Props};
use motif_theme::Theme;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info};

/// Scene file contents
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Scene {
    #[serde(default)]
    pub config: AnimateConfig,
    #[serde(default)]
    pub defaults: IndexMap<String, Props>,
    #[serde(default, rename = "component")]
    pub components: Vec<SceneComponent>,
}

/// One component in a scene
#[derive(Debug, Deserialize, Serialize)]
pub struct SceneComponent {
    pub name: String,
    #[serde(default)]
    pub root: Option<NodeSpec>,
    #[serde(default)]
    pub refs: IndexMap<String, NodeSpec>,
    #[serde(flatten)]
    pub props: ComponentProps,
    #[serde(default)]
    pub state: ComponentState,
}

/// A rendered element
#[derive(Debug, Deserialize, Serialize)]
pub struct NodeSpec {
    pub render_id: String,
    #[serde(default)]
    pub dom_id: Option<String>,
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse scene {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let scene: Scene = toml::from_str(content)?;
        let mut seen = std::collections::HashSet::new();
        for component in &scene.components {
            if !seen.insert(component.name.as_str()) {
                bail!("duplicate component name `{}`", component.name);
            }
        }
        Ok(scene)
    }

    /// Mount every component into a fresh document
    pub fn build(self, theme: Theme) -> Stage {
        let store = Rc::new(ParamStore::new());
        for (key, params) in self.defaults {
            store.set(&key, params);
        }

        let ctx = AnimateContext::new(self.config, store.clone(), theme.into_resolver());
        let mut document = Document::new();
        let scheduler = FrameScheduler::new();
        scheduler.set_frame_callback(|| debug!("frame requested"));

        let mut components = Vec::with_capacity(self.components.len());
        for spec in self.components {
            let component = AnimatedComponent::new(&ctx);
            {
                let mut c = component.borrow_mut();
                c.mount(spec.props, spec.state);
                if let Some(root) = spec.root {
                    c.bind_root(document.create_node(root.render_id, root.dom_id));
                }
                for (name, node) in spec.refs {
                    c.bind_ref(name, document.create_node(node.render_id, node.dom_id));
                }
            }
            components.push((spec.name, component));
        }

        info!(components = components.len(), "scene mounted");
        Stage {
            document,
            scheduler,
            store,
            components,
        }
    }
}

/// A mounted scene ready to be driven frame by frame
pub struct Stage {
    pub document: Document,
    pub scheduler: FrameScheduler,
    pub store: Rc<ParamStore>,
    pub components: Vec<(String, Rc<RefCell<AnimatedComponent>>)>,
}

impl Stage {
    /// Move every component's step forward by `delta`
    pub fn advance(&mut self, delta: f64) {
        for (_, component) in &self.components {
            let mut c = component.borrow_mut();
            let mut state = c.state().clone();
            state.step = Some(state.step.unwrap_or(0.0) + delta);
            c.set_state(state);
        }
    }

    /// Queue every component and flush one frame
    pub fn tick(&mut self) -> Result<FlushReport> {
        let handle = self.scheduler.handle();
        for (_, component) in &self.components {
            component.borrow_mut().animate(&handle);
        }

        let report = self.scheduler.flush(&mut self.document);
        if let Some((key, err)) = report.errors.first() {
            let name = self.name_for_owner(key).unwrap_or(key.as_str());
            bail!("component `{name}`: {err}");
        }
        Ok(report)
    }

    /// Current style map of every component, by name
    pub fn styles(&self) -> Result<IndexMap<String, StyleMap>> {
        let mut all = IndexMap::new();
        for (name, component) in &self.components {
            let styles = component
                .borrow()
                .get_animation(None)
                .with_context(|| format!("component `{name}`"))?;
            all.insert(name.clone(), styles.unwrap_or_default());
        }
        Ok(all)
    }

    /// Unmount every component, clearing the head
    pub fn teardown(&mut self) {
        for (_, component) in &self.components {
            component.borrow_mut().unmount(&mut self.document);
        }
    }

    fn name_for_owner(&self, owner: &str) -> Option<&str> {
        self.components
            .iter()
            .find(|(_, c)| c.borrow().owner_tag() == owner)
            .map(|(name, _)| name.as_str())
    }
}
