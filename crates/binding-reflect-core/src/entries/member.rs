//! Method and property entries owned by a class.

use crate::{SignatureKind, TypeIndex};

/// A method, constructor or free function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodEntry {
    /// Owning class (back-reference by arena slot).
    pub owner: TypeIndex,
    /// Method name; empty for constructors.
    pub name: String,
    pub kind: SignatureKind,
    /// `None` when the declaration listed no types at all.
    pub return_type: Option<TypeIndex>,
    pub args: Vec<TypeIndex>,
    /// Policy annotations in first-seen order, without duplicates.
    pub policies: Vec<String>,
    /// True for free functions and constructors.
    pub is_static: bool,
}

impl MethodEntry {
    /// Create a method from a declared type list (`types[0]` is the return type).
    pub fn new(
        owner: TypeIndex,
        name: impl Into<String>,
        kind: SignatureKind,
        types: &[TypeIndex],
        policies: &[String],
    ) -> Self {
        let (return_type, args) = match types.split_first() {
            Some((ret, args)) => (Some(*ret), args.to_vec()),
            None => (None, Vec::new()),
        };
        Self {
            owner,
            name: name.into(),
            kind,
            return_type,
            args,
            policies: dedup_policies(policies),
            is_static: kind.is_static(),
        }
    }

    /// Check if this is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.name.is_empty()
    }
}

/// A property merged from getter and setter declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    pub owner: TypeIndex,
    /// Normalized name (accessor prefix removed).
    pub name: String,
    /// Getter return type, or setter parameter type until a getter arrives.
    pub value_type: Option<TypeIndex>,
    pub is_readable: bool,
    pub is_writable: bool,
    pub policies: Vec<String>,
}

impl PropertyEntry {
    /// Create a property that is neither readable nor writable yet.
    pub fn new(owner: TypeIndex, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
            value_type: None,
            is_readable: false,
            is_writable: false,
            policies: Vec::new(),
        }
    }

    /// Merge a getter declaration.
    ///
    /// The getter's return type always wins for the value type.
    pub fn apply_getter(&mut self, types: &[TypeIndex], policies: &[String]) {
        if let Some(ret) = types.first() {
            self.value_type = Some(*ret);
        }
        self.is_readable = true;
        self.merge_policies(policies);
    }

    /// Merge a setter declaration.
    ///
    /// The setter's parameter type only fills the value type while no getter
    /// has been seen.
    pub fn apply_setter(&mut self, types: &[TypeIndex], policies: &[String]) {
        if !self.is_readable {
            if let Some(value) = types.get(1).or(types.last()) {
                self.value_type = Some(*value);
            }
        }
        self.is_writable = true;
        self.merge_policies(policies);
    }

    /// Check if this property is read-only.
    pub fn is_read_only(&self) -> bool {
        self.is_readable && !self.is_writable
    }

    /// Check if this property is write-only.
    pub fn is_write_only(&self) -> bool {
        !self.is_readable && self.is_writable
    }

    /// Check if this property is read-write.
    pub fn is_read_write(&self) -> bool {
        self.is_readable && self.is_writable
    }

    fn merge_policies(&mut self, policies: &[String]) {
        for policy in policies {
            if !self.policies.contains(policy) {
                self.policies.push(policy.clone());
            }
        }
    }
}

fn dedup_policies(policies: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(policies.len());
    for policy in policies {
        if !out.contains(policy) {
            out.push(policy.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(slot: u32) -> TypeIndex {
        TypeIndex::new(slot)
    }

    #[test]
    fn method_splits_return_and_args() {
        let types = [idx(0), idx(1), idx(2)];
        let method = MethodEntry::new(idx(5), "resize", SignatureKind::Method, &types, &[]);
        assert_eq!(method.return_type, Some(idx(0)));
        assert_eq!(method.args, vec![idx(1), idx(2)]);
        assert!(!method.is_static);
        assert!(!method.is_constructor());
    }

    #[test]
    fn constructor_is_static() {
        let ctor = MethodEntry::new(idx(5), "", SignatureKind::Constructor, &[idx(5)], &[]);
        assert!(ctor.is_static);
        assert!(ctor.is_constructor());
        assert!(ctor.args.is_empty());
    }

    #[test]
    fn method_without_types() {
        let method = MethodEntry::new(idx(5), "noop", SignatureKind::Function, &[], &[]);
        assert_eq!(method.return_type, None);
        assert!(method.args.is_empty());
    }

    #[test]
    fn method_policies_deduplicated() {
        let policies = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let method = MethodEntry::new(idx(1), "f", SignatureKind::Function, &[idx(0)], &policies);
        assert_eq!(method.policies, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn property_getter_then_setter() {
        let mut prop = PropertyEntry::new(idx(1), "size");
        prop.apply_getter(&[idx(2)], &[]);
        prop.apply_setter(&[idx(0), idx(3)], &[]);
        assert!(prop.is_read_write());
        assert_eq!(prop.value_type, Some(idx(2)));
    }

    #[test]
    fn property_setter_then_getter() {
        let mut prop = PropertyEntry::new(idx(1), "size");
        prop.apply_setter(&[idx(0), idx(3)], &[]);
        assert_eq!(prop.value_type, Some(idx(3)));
        prop.apply_getter(&[idx(2)], &[]);
        assert!(prop.is_read_write());
        assert_eq!(prop.value_type, Some(idx(2)));
    }

    #[test]
    fn property_accessor_only_flags() {
        let mut read = PropertyEntry::new(idx(1), "a");
        read.apply_getter(&[idx(2)], &[]);
        assert!(read.is_read_only());

        let mut write = PropertyEntry::new(idx(1), "b");
        write.apply_setter(&[idx(0), idx(2)], &[]);
        assert!(write.is_write_only());
    }
}
