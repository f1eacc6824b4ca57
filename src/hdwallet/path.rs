/*
    This module parses derivation paths passed in as strings into
    vectors of ChildOptions that can be used to derive child keys.
*/

use crate::{
    hdwallet::{
        ChildOptions,
        HDWError
    }
};

/// Hardened child numbers occupy the upper half of the index space
const HARDENED_OFFSET: u32 = 1 << 31;

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub children: Vec<ChildOptions>
}

impl Path {
    /**
        Parses a path string of the form "m/44'/0'/0'/0/0".
        Hardened levels are marked with an apostrophe or an 'h'.
    */
    pub fn from_str(path: &str) -> Result<Self, HDWError> {
        let mut segments: Vec<&str> = path.split('/').collect();
        if segments.is_empty() || segments[0] != "m" {
            return Err(HDWError::BadPath(path.to_string()))
        }
        segments.remove(0);

        let mut children: Vec<ChildOptions> = Vec::with_capacity(segments.len());
        for segment in segments {
            children.push(Self::parse_segment(segment).ok_or_else(|| HDWError::BadPath(path.to_string()))?);
        }

        Ok(Self {
            children
        })
    }

    fn parse_segment(segment: &str) -> Option<ChildOptions> {
        if segment.is_empty() { return None }

        let (digits, hardened) = match segment.strip_suffix(|x| x == '\'' || x == 'h') {
            Some(digits) => (digits, true),
            None => (segment, false)
        };

        //Indexes have to stay below the hardened offset either way
        let index: u32 = digits.parse().ok().filter(|x| *x < HARDENED_OFFSET)?;

        match hardened {
            true => Some(ChildOptions::Hardened(index)),
            false => Some(ChildOptions::Normal(index))
        }
    }

    pub fn to_string(&self) -> String {
        let mut path: Vec<String> = vec!["m".to_string()];
        for child in self.children.iter() {
            path.push(match child {
                ChildOptions::Normal(x) => format!("{}", x),
                ChildOptions::Hardened(x) => format!("{}'", x)
            });
        }

        path.join("/")
    }

    pub fn empty() -> Self {
        Self {
            children: vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ChildOptions,
        Path
    };

    #[test]
    fn path_round_trip() {
        let path_str = "m/84'/0'/0'/0/0";
        let path_struct = Path {
            children: vec![
                ChildOptions::Hardened(84),
                ChildOptions::Hardened(0),
                ChildOptions::Hardened(0),
                ChildOptions::Normal(0),
                ChildOptions::Normal(0)
            ]
        };

        assert_eq!(Path::from_str(path_str).unwrap(), path_struct);
        assert_eq!(path_struct.to_string(), path_str);
    }

    #[test]
    fn h_suffix_marks_hardened_children() {
        assert_eq!(
            Path::from_str("m/44h/0h/0h/0").unwrap(),
            Path::from_str("m/44'/0'/0'/0").unwrap()
        );
    }

    #[test]
    fn master_only_path_is_empty() {
        assert_eq!(Path::from_str("m").unwrap(), Path::empty());
        assert_eq!(Path::empty().to_string(), "m");
    }

    #[test]
    fn bad_paths_are_rejected() {
        let bad = [
            "44'/0'/0'",        //missing master marker
            "m/44'/x/0'",       //non numeric index
            "m//0",             //empty segment
            "m/2147483648",     //index in the hardened range
            "m/2147483648'"     //hardened index past the offset
        ];

        for path in bad {
            assert!(Path::from_str(path).is_err());
        }
    }
}
