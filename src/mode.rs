// POSIX permission and file-type bits.
const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

const S_IRUSR: u32 = 0o400;
const S_IWUSR: u32 = 0o200;
const S_IXUSR: u32 = 0o100;
const S_IRGRP: u32 = 0o040;
const S_IWGRP: u32 = 0o020;
const S_IXGRP: u32 = 0o010;
const S_IROTH: u32 = 0o004;
const S_IWOTH: u32 = 0o002;
const S_IXOTH: u32 = 0o001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triplet {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl Triplet {
    fn from_bits(mode: u32, read: u32, write: u32, execute: u32) -> Self {
        Triplet {
            read: mode & read != 0,
            write: mode & write != 0,
            execute: mode & execute != 0,
        }
    }

    /// Plain `rwx` rendering with `-` for unset bits.
    #[must_use]
    pub fn symbolic(self) -> String {
        let mut s = String::with_capacity(3);
        push_triplet(&mut s, self, false, 'x');
        s
    }
}

/// Permission flags decoded from a raw `st_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionSet {
    pub owner: Triplet,
    pub group: Triplet,
    pub other: Triplet,
    pub setuid: bool,
    pub setgid: bool,
    pub sticky: bool,
    file_type: u32,
    bits: u32,
}

impl PermissionSet {
    #[must_use]
    pub fn from_mode(mode: u32) -> Self {
        PermissionSet {
            owner: Triplet::from_bits(mode, S_IRUSR, S_IWUSR, S_IXUSR),
            group: Triplet::from_bits(mode, S_IRGRP, S_IWGRP, S_IXGRP),
            other: Triplet::from_bits(mode, S_IROTH, S_IWOTH, S_IXOTH),
            setuid: mode & S_ISUID != 0,
            setgid: mode & S_ISGID != 0,
            sticky: mode & S_ISVTX != 0,
            file_type: mode & S_IFMT,
            bits: mode & 0o7777,
        }
    }

    #[must_use]
    pub fn has_special(&self) -> bool {
        self.setuid || self.setgid || self.sticky
    }

    /// Permission bits only, file type stripped.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[must_use]
    pub fn octal(&self) -> String {
        format!("0o{:o}", self.bits())
    }

    /// `ls -l` style string, e.g. `drwxrwxrwt` or `-rwsr-xr-x`.
    #[must_use]
    pub fn symbolic(&self) -> String {
        let mut s = String::with_capacity(10);
        s.push(type_char(self.file_type));
        push_triplet(&mut s, self.owner, self.setuid, 's');
        push_triplet(&mut s, self.group, self.setgid, 's');
        push_triplet(&mut s, self.other, self.sticky, 't');
        s
    }
}

fn push_triplet(s: &mut String, t: Triplet, special: bool, marker: char) {
    s.push(if t.read { 'r' } else { '-' });
    s.push(if t.write { 'w' } else { '-' });
    s.push(match (special, t.execute) {
        (true, true) => marker,
        (true, false) => marker.to_ascii_uppercase(),
        (false, true) => 'x',
        (false, false) => '-',
    });
}

fn type_char(file_type: u32) -> char {
    match file_type {
        S_IFDIR => 'd',
        S_IFREG => '-',
        S_IFLNK => 'l',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        _ => '-',
    }
}
