//! 리댁션 영역 모델.
//!
//! `left,top,right,bottom` 그룹을 `;`로 구분한 텍스트 설정을 파싱한다.
//! 하나라도 잘못된 그룹이 있으면 전체 설정을 거부한다 (부분 결과 없음).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 화면 좌표계의 직사각형 영역 (`right`, `bottom`은 배타적 경계)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl Region {
    /// 영역 생성. 폭/높이가 0 이하이면 `None`.
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Option<Self> {
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn top(&self) -> i64 {
        self.top
    }

    pub fn right(&self) -> i64 {
        self.right
    }

    pub fn bottom(&self) -> i64 {
        self.bottom
    }

    /// 영역 너비 (항상 양수)
    pub fn width(&self) -> u64 {
        (self.right - self.left) as u64
    }

    /// 영역 높이 (항상 양수)
    pub fn height(&self) -> u64 {
        (self.bottom - self.top) as u64
    }

    /// 좌표 `(x, y)`가 영역 안에 있는지
    #[cfg(test)]
    pub(crate) fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// `width`×`height` 비트맵 안에 완전히 들어가는지
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// 파싱 실패 사유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionParseReason {
    /// 좌표 개수가 4개가 아님
    WrongFieldCount { found: usize },
    /// 정수로 해석할 수 없는 토큰
    NotAnInteger { token: String },
    /// `right <= left` 또는 `bottom <= top`
    DegenerateRectangle,
}

impl fmt::Display for RegionParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount { found } => {
                write!(f, "좌표 4개 필요 (left,top,right,bottom), {found}개 발견")
            }
            Self::NotAnInteger { token } => write!(f, "정수가 아닌 값: '{token}'"),
            Self::DegenerateRectangle => write!(f, "영역 크기가 0 이하"),
        }
    }
}

/// 리댁션 설정 파싱 에러: 문제가 된 그룹과 사유 포함
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("리댁션 영역 #{index} '{group}' 파싱 실패: {reason}")]
pub struct RegionParseError {
    /// 빈 그룹을 제외한 0-based 그룹 번호
    pub index: usize,
    /// 원본 그룹 텍스트 (trim 적용)
    pub group: String,
    pub reason: RegionParseReason,
}

/// 순서가 있는 리댁션 영역 목록. 뒤 영역이 앞 영역 위에 덧칠된다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSet(Vec<Region>);

impl RegionSet {
    /// 빈 목록 (리댁션 없음)
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// 텍스트 설정 파싱
    ///
    /// 빈 문자열/공백은 빈 목록. 빈 그룹(`;;`, 끝의 `;`)과 빈 토큰은 무시한다.
    pub fn parse(spec: &str) -> Result<Self, RegionParseError> {
        let mut regions = Vec::new();

        let groups = spec.split(';').map(str::trim).filter(|g| !g.is_empty());
        for (index, group) in groups.enumerate() {
            let fail = |reason| RegionParseError {
                index,
                group: group.to_string(),
                reason,
            };

            let tokens: Vec<&str> = group
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.len() != 4 {
                return Err(fail(RegionParseReason::WrongFieldCount {
                    found: tokens.len(),
                }));
            }

            let mut coords = [0i64; 4];
            for (slot, token) in coords.iter_mut().zip(&tokens) {
                *slot = token.parse::<i64>().map_err(|_| {
                    fail(RegionParseReason::NotAnInteger {
                        token: token.to_string(),
                    })
                })?;
            }

            let [left, top, right, bottom] = coords;
            let region = Region::new(left, top, right, bottom)
                .ok_or_else(|| fail(RegionParseReason::DegenerateRectangle))?;
            regions.push(region);
        }

        Ok(Self(regions))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.0
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        Self(regions)
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for RegionSet {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, region) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{region}")?;
        }
        Ok(())
    }
}
