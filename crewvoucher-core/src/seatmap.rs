use crate::VoucherError;

/// Closed set of aircraft profiles the voucher program covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftType {
    Atr,
    Airbus320,
    Boeing737Max,
}

impl AircraftType {
    /// Parses the aircraft label carried on the request. Anything outside
    /// the closed set is rejected.
    pub fn parse(label: &str) -> Result<Self, VoucherError> {
        match label {
            "ATR" => Ok(Self::Atr),
            "Airbus 320" => Ok(Self::Airbus320),
            "Boeing 737 Max" => Ok(Self::Boeing737Max),
            other => Err(VoucherError::InvalidAircraftType(other.to_string())),
        }
    }
}

/// Cabin layout for one aircraft profile: 1-based rows crossed with an
/// ordered set of seat-column letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    pub rows: u32,
    pub letters: &'static [char],
}

impl SeatMap {
    /// Resolves the seat map for an aircraft label, failing with
    /// `InvalidAircraftType` for unknown labels. Pure, no side effects.
    pub fn for_aircraft(label: &str) -> Result<Self, VoucherError> {
        Ok(Self::of(AircraftType::parse(label)?))
    }

    pub fn of(aircraft: AircraftType) -> Self {
        match aircraft {
            AircraftType::Atr => Self {
                rows: 18,
                letters: &['A', 'C', 'D', 'F'],
            },
            AircraftType::Airbus320 | AircraftType::Boeing737Max => Self {
                rows: 32,
                letters: &['A', 'B', 'C', 'D', 'E', 'F'],
            },
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows as usize * self.letters.len()
    }

    /// Seat identifier for a flat index into the rows x letters grid,
    /// e.g. index 0 of the ATR map is "1A".
    pub fn seat_at(&self, index: usize) -> String {
        let row = index / self.letters.len() + 1;
        let letter = self.letters[index % self.letters.len()];
        format!("{}{}", row, letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VoucherError;

    #[test]
    fn atr_profile_has_72_seats() {
        let map = SeatMap::for_aircraft("ATR").unwrap();
        assert_eq!(map.rows, 18);
        assert_eq!(map.letters, &['A', 'C', 'D', 'F']);
        assert_eq!(map.capacity(), 72);
    }

    #[test]
    fn narrowbody_profiles_share_192_seat_layout() {
        let airbus = SeatMap::for_aircraft("Airbus 320").unwrap();
        let boeing = SeatMap::for_aircraft("Boeing 737 Max").unwrap();
        assert_eq!(airbus, boeing);
        assert_eq!(airbus.capacity(), 192);
    }

    #[test]
    fn unknown_aircraft_is_rejected() {
        for label in ["Spaceship", "atr", "Airbus320", ""] {
            match SeatMap::for_aircraft(label) {
                Err(VoucherError::InvalidAircraftType(reported)) => {
                    assert_eq!(reported, label)
                }
                other => panic!("expected InvalidAircraftType, got {:?}", other),
            }
        }
    }

    #[test]
    fn seat_at_covers_the_full_grid() {
        let map = SeatMap::of(AircraftType::Atr);
        assert_eq!(map.seat_at(0), "1A");
        assert_eq!(map.seat_at(3), "1F");
        assert_eq!(map.seat_at(4), "2A");
        assert_eq!(map.seat_at(map.capacity() - 1), "18F");
    }
}
