//! Retained render tree for the landing page
//!
//! A small arena of nodes standing in for the page structure: a title
//! container holding a stack of two text lines, a logo, hoverable nav links,
//! language buttons and an invisible link whose target follows the active
//! language. The float animator rewrites text nodes into per-glyph children;
//! the crossfade clones the stack into a fading ghost overlay.

use crate::config::content;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Title,
    Stack,
    Headline,
    Subline,
    Logo,
    NavLink,
    LanguageButtons,
    InvisibleLink,
    Ghost,
    Glyph,
    Space,
}

#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub opacity: f32,
    pub offset_y: f32,
    pub visible: bool,
    pub href: Option<String>,
    /// Floats on pointer-enter, reverts on pointer-leave
    pub hover_float: bool,
    /// Floats once and never reverts (the logo)
    pub permanent_float: bool,
    /// Last drawn bounds, recorded by the renderer for hit-testing
    pub bounds: Option<Rect>,
    /// Original text captured while the node is float-wrapped
    pub original_text: Option<String>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            children: Vec::new(),
            parent: None,
            opacity: 1.0,
            offset_y: 0.0,
            visible: true,
            href: None,
            hover_float: false,
            permanent_float: false,
            bounds: None,
            original_text: None,
        }
    }
}

pub struct Scene {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    commit_requested: bool,
}

impl Scene {
    /// Empty tree with just a root. Pages without a title degrade to this.
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Some(Node::new(NodeKind::Root)));
        Self {
            nodes,
            root: NodeId(0),
            commit_requested: false,
        }
    }

    /// The index-page structure: title > stack > headline + subline, a
    /// permanent-float logo, hoverable nav links, language buttons and the
    /// invisible link.
    pub fn index_page() -> Self {
        let mut scene = Self::new();
        let root = scene.root;

        let title = scene.create(NodeKind::Title);
        scene.append_child(root, title);
        let stack = scene.create(NodeKind::Stack);
        scene.append_child(title, stack);

        let headline = scene.create(NodeKind::Headline);
        scene.set_text(headline, content::RIGHT_HEADLINE);
        scene.append_child(stack, headline);

        let subline = scene.create(NodeKind::Subline);
        scene.set_text(subline, content::RIGHT_SUBLINE);
        scene.append_child(stack, subline);

        let logo = scene.create(NodeKind::Logo);
        scene.set_text(logo, content::LOGO_TEXT);
        if let Some(node) = scene.get_mut(logo) {
            node.hover_float = true;
            node.permanent_float = true;
        }
        scene.append_child(root, logo);

        for (label, target) in content::NAV_LINKS {
            let link = scene.create(NodeKind::NavLink);
            scene.set_text(link, label);
            if let Some(node) = scene.get_mut(link) {
                node.hover_float = true;
                node.href = Some(target.to_string());
            }
            scene.append_child(root, link);
        }

        let buttons = scene.create(NodeKind::LanguageButtons);
        scene.append_child(root, buttons);

        let invisible = scene.create(NodeKind::InvisibleLink);
        if let Some(node) = scene.get_mut(invisible) {
            node.href = Some(content::RIGHT_HREF.to_string());
        }
        scene.append_child(root, invisible);

        scene
    }

    // =========================================================================
    // Node access
    // =========================================================================

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    fn find(&self, kind: NodeKind) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(i, slot)| match slot {
            Some(node) if node.kind == kind => Some(NodeId(i)),
            _ => None,
        })
    }

    pub fn title(&self) -> Option<NodeId> {
        self.find(NodeKind::Title)
    }

    pub fn stack(&self) -> Option<NodeId> {
        self.find(NodeKind::Stack)
    }

    pub fn headline(&self) -> Option<NodeId> {
        self.find(NodeKind::Headline)
    }

    pub fn subline(&self) -> Option<NodeId> {
        self.find(NodeKind::Subline)
    }

    pub fn logo(&self) -> Option<NodeId> {
        self.find(NodeKind::Logo)
    }

    pub fn invisible_link(&self) -> Option<NodeId> {
        self.find(NodeKind::InvisibleLink)
    }

    pub fn language_buttons(&self) -> Option<NodeId> {
        self.find(NodeKind::LanguageButtons)
    }

    pub fn ghosts(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Some(node) if node.kind == NodeKind::Ghost => Some(NodeId(i)),
                _ => None,
            })
            .collect()
    }

    /// Topmost visible hoverable node under the pointer, if any.
    pub fn hoverable_at(&self, x: f32, y: f32) -> Option<NodeId> {
        self.nodes.iter().enumerate().rev().find_map(|(i, slot)| match slot {
            Some(node)
                if node.hover_float
                    && node.visible
                    && node.bounds.map(|b| b.contains(x, y)).unwrap_or(false) =>
            {
                Some(NodeId(i))
            }
            _ => None,
        })
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    pub fn create(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(kind)));
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Detach a node from its parent and free its whole subtree.
    pub fn remove(&mut self, id: NodeId) {
        let parent = match self.get(id) {
            Some(node) => node.parent,
            None => return,
        };
        if let Some(parent) = parent {
            if let Some(node) = self.get_mut(parent) {
                node.children.retain(|&c| c != id);
            }
        }
        self.free_subtree(id);
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = match self.get(id) {
            Some(node) => node.children.clone(),
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.0] = None;
    }

    /// Deep-copy a subtree into a new detached node. Used by the crossfade to
    /// snapshot the stack; cloned glyphs keep their current offsets but are
    /// not registered with the animator, so the ghost is frozen mid-float.
    pub fn clone_subtree(&mut self, id: NodeId) -> Option<NodeId> {
        let mut template = self.get(id)?.clone();
        let children = std::mem::take(&mut template.children);
        template.parent = None;
        let copy = NodeId(self.nodes.len());
        self.nodes.push(Some(template));
        for child in children {
            if let Some(child_copy) = self.clone_subtree(child) {
                self.append_child(copy, child_copy);
            }
        }
        Some(copy)
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|node| node.text.as_str())
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.get_mut(id) {
            node.text = text.to_string();
        }
    }

    /// Text as currently presented: the node's own text, or the concatenation
    /// of its glyph/space children while float-wrapped.
    pub fn visible_text(&self, id: NodeId) -> String {
        let node = match self.get(id) {
            Some(node) => node,
            None => return String::new(),
        };
        if node.children.is_empty() {
            return node.text.clone();
        }
        node.children
            .iter()
            .filter_map(|&child| self.get(child))
            .map(|child| child.text.as_str())
            .collect()
    }

    pub fn set_offset_y(&mut self, id: NodeId, offset: f32) {
        if let Some(node) = self.get_mut(id) {
            node.offset_y = offset;
        }
    }

    pub fn set_opacity(&mut self, id: NodeId, opacity: f32) {
        if let Some(node) = self.get_mut(id) {
            node.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.get_mut(id) {
            node.visible = visible;
        }
    }

    pub fn set_href(&mut self, id: NodeId, href: &str) {
        if let Some(node) = self.get_mut(id) {
            node.href = Some(href.to_string());
        }
    }

    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(node) = self.get_mut(id) {
            node.bounds = Some(bounds);
        }
    }

    // =========================================================================
    // Float wrapping support
    // =========================================================================

    pub fn float_applied(&self, id: NodeId) -> bool {
        self.get(id).map(|node| node.original_text.is_some()).unwrap_or(false)
    }

    /// Capture the original text and clear the node so glyph children can be
    /// appended. No-op if already wrapped.
    pub fn begin_float(&mut self, id: NodeId) -> Option<String> {
        let node = self.get_mut(id)?;
        if node.original_text.is_some() {
            return None;
        }
        let original = std::mem::take(&mut node.text);
        node.original_text = Some(original.clone());
        Some(original)
    }

    /// Drop the glyph children and restore the captured text verbatim.
    pub fn end_float(&mut self, id: NodeId) {
        let (children, original) = match self.get_mut(id) {
            Some(node) => match node.original_text.take() {
                Some(original) => (std::mem::take(&mut node.children), original),
                None => return,
            },
            None => return,
        };
        for child in children {
            self.free_subtree(child);
        }
        if let Some(node) = self.get_mut(id) {
            node.text = original;
        }
    }

    pub fn append_glyph(&mut self, parent: NodeId, ch: char) -> NodeId {
        let glyph = self.create(NodeKind::Glyph);
        if let Some(node) = self.get_mut(glyph) {
            node.text = ch.to_string();
        }
        self.append_child(parent, glyph);
        glyph
    }

    pub fn append_space(&mut self, parent: NodeId) -> NodeId {
        let space = self.create(NodeKind::Space);
        if let Some(node) = self.get_mut(space) {
            node.text = " ".to_string();
        }
        self.append_child(parent, space);
        space
    }

    // =========================================================================
    // Commit primitive
    // =========================================================================

    /// Mark the current tree state as one that must reach the screen before
    /// later mutations become visible. The host consumes this and schedules an
    /// immediate paint; the crossfade relies on it so the ghost overlay is
    /// present before the content underneath is swapped.
    pub fn commit(&mut self) {
        self.commit_requested = true;
    }

    pub fn take_commit(&mut self) -> bool {
        std::mem::take(&mut self.commit_requested)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_structure() {
        let scene = Scene::index_page();
        let title = scene.title().unwrap();
        let stack = scene.stack().unwrap();
        assert_eq!(scene.children(title), &[stack]);
        assert_eq!(scene.children(stack).len(), 2);
        assert_eq!(scene.text(scene.headline().unwrap()), Some("Undercurrents"));
        assert_eq!(
            scene.get(scene.invisible_link().unwrap()).unwrap().href.as_deref(),
            Some("about.html")
        );
        assert!(scene.get(scene.logo().unwrap()).unwrap().permanent_float);
    }

    #[test]
    fn test_remove_frees_subtree() {
        let mut scene = Scene::index_page();
        let stack = scene.stack().unwrap();
        let headline = scene.headline().unwrap();
        scene.remove(stack);
        assert!(!scene.contains(stack));
        assert!(!scene.contains(headline));
        let title = scene.title().unwrap();
        assert!(scene.children(title).is_empty());
    }

    #[test]
    fn test_clone_subtree_is_deep_and_detached() {
        let mut scene = Scene::index_page();
        let stack = scene.stack().unwrap();
        let copy = scene.clone_subtree(stack).unwrap();
        assert!(scene.get(copy).unwrap().parent.is_none());
        assert_eq!(scene.children(copy).len(), 2);

        // Mutating the copy leaves the original untouched
        let copied_headline = scene.children(copy)[0];
        scene.set_text(copied_headline, "changed");
        assert_eq!(scene.text(scene.headline().unwrap()), Some("Undercurrents"));
    }

    #[test]
    fn test_float_wrap_round_trip() {
        let mut scene = Scene::index_page();
        let headline = scene.headline().unwrap();
        let original = scene.begin_float(headline).unwrap();
        assert_eq!(original, "Undercurrents");
        assert!(scene.float_applied(headline));
        assert!(scene.begin_float(headline).is_none());

        let glyph = scene.append_glyph(headline, 'U');
        scene.append_space(headline);
        assert_eq!(scene.visible_text(headline), "U ");

        scene.end_float(headline);
        assert!(!scene.float_applied(headline));
        assert!(!scene.contains(glyph));
        assert_eq!(scene.text(headline), Some("Undercurrents"));
    }

    #[test]
    fn test_hoverable_at_uses_recorded_bounds() {
        let mut scene = Scene::index_page();
        let logo = scene.logo().unwrap();
        assert_eq!(scene.hoverable_at(40.0, 35.0), None);

        scene.set_bounds(
            logo,
            Rect {
                x: 32.0,
                y: 20.0,
                width: 120.0,
                height: 26.0,
            },
        );
        assert_eq!(scene.hoverable_at(40.0, 35.0), Some(logo));
        scene.set_visible(logo, false);
        assert_eq!(scene.hoverable_at(40.0, 35.0), None);
    }

    #[test]
    fn test_commit_flag_is_consumed_once() {
        let mut scene = Scene::new();
        assert!(!scene.take_commit());
        scene.commit();
        assert!(scene.take_commit());
        assert!(!scene.take_commit());
    }

    #[test]
    fn test_missing_nodes_are_noops() {
        let mut scene = Scene::new();
        assert!(scene.title().is_none());
        let stale = NodeId(99);
        scene.set_text(stale, "x");
        scene.set_opacity(stale, 0.5);
        scene.remove(stale);
        assert_eq!(scene.visible_text(stale), "");
    }
}
