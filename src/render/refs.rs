use pdf_writer::Ref;
use std::collections::HashMap;

/// The objects that make up a rendered frame. A frame is a single page drawn
/// with a single font, so every object occurs at most once.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page,
    Content,
    Font,
    CidFont,
    ToUnicode,
    FontDescriptor,
    FontData,
}

/// Hands out PDF object ids and remembers which object each one was for
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// The id of `ref_type`, allocating one the first time it's asked for
    pub fn get(&mut self, ref_type: RefType) -> Ref {
        if let Some(id) = self.refs.get(&ref_type) {
            return *id;
        }
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_stable_and_distinct() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.get(RefType::Catalog);
        let page = refs.get(RefType::Page);
        assert_eq!(refs.get(RefType::Catalog), catalog);
        assert_eq!(catalog, Ref::new(1));
        assert_eq!(page, Ref::new(2));
    }
}
